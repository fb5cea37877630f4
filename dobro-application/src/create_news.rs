use super::*;
use usecases::NewNews;

pub fn create_news(
    connections: &sqlite::Connections,
    created_by: i64,
    new_news: NewNews,
) -> Result<NewsRecord> {
    let mut connection = connections.exclusive()?;
    let record = connection.transaction(|conn| {
        usecases::create_news(conn, created_by, new_news).map_err(|err| {
            warn!("Failed to create news entry: {err}");
            err
        })
    })?;
    Ok(record)
}
