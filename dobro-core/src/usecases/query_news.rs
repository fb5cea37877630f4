use crate::{text, usecases::prelude::*};

#[derive(Debug, Clone, Default)]
pub struct NewsQuery {
    pub city: Option<String>,
    pub pattern: Option<String>,
    pub favorites_only: bool,
    pub token: Option<String>,
}

pub fn query_news<R>(
    repo: &R,
    auth: &dyn AuthTokenDecoder,
    query: NewsQuery,
) -> Result<Vec<NewsRecord>>
where
    R: NewsRepo,
{
    let NewsQuery {
        city,
        pattern,
        favorites_only,
        token,
    } = query;
    let pattern = pattern.as_deref().map(text::compile_search_pattern).transpose()?;
    let favorited_by = super::resolve_favorites_user(auth, favorites_only, token.as_deref());
    let filter = NewsFilter { city, favorited_by };
    let mut news = repo.filter_news(&filter)?;
    if let Some(pattern) = &pattern {
        news.retain(|(item, _)| {
            text::matches_name_or_description(pattern, &item.title, item.description.as_deref())
        });
    }
    Ok(news
        .into_iter()
        .map(|(news, city)| NewsRecord { news, city })
        .collect())
}

pub fn get_news<R: NewsRepo>(repo: &R, id: i64) -> Result<NewsRecord> {
    let (news, city) = repo.get_news(id).map_err(|err| match err {
        RepoError::NotFound => Error::NewsNotFound,
        err => Error::Repo(err),
    })?;
    Ok(NewsRecord { news, city })
}
