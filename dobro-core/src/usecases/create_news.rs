use crate::usecases::prelude::*;

#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    // Omitted for portal-wide entries.
    pub city: Option<String>,
    pub meta: Option<String>,
}

pub fn create_news<R>(repo: &R, created_by: i64, new_news: NewNews) -> Result<NewsRecord>
where
    R: NewsRepo + CityRepo,
{
    let NewNews {
        title,
        description,
        image,
        city,
        meta,
    } = new_news;
    let city = city
        .map(|name| {
            repo.try_get_city_by_name(&name)?
                .ok_or(Error::CityNotFound)
        })
        .transpose()?;
    let news = NewsItem {
        // Assigned by the store on insert.
        id: 0,
        title,
        description,
        image,
        city_id: city.as_ref().map(|city| city.id),
        created_by,
        approved_by: None,
        meta,
        created_at: Timestamp::now(),
    };
    let news = repo.create_news(news)?;
    log::info!("Created news entry {} ('{}')", news.id, news.title);
    Ok(NewsRecord {
        news,
        city: city.map(|city| city.name),
    })
}
