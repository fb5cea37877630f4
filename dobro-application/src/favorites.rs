use super::*;

pub fn add_organization_favorite(
    connections: &sqlite::Connections,
    user_id: i64,
    org_id: i64,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::add_organization_favorite(conn, user_id, org_id))?;
    Ok(())
}

pub fn remove_organization_favorite(
    connections: &sqlite::Connections,
    user_id: i64,
    org_id: i64,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::remove_organization_favorite(conn, user_id, org_id))?;
    Ok(())
}

pub fn add_event_favorite(
    connections: &sqlite::Connections,
    user_id: i64,
    event_id: i64,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::add_event_favorite(conn, user_id, event_id))?;
    Ok(())
}

pub fn remove_event_favorite(
    connections: &sqlite::Connections,
    user_id: i64,
    event_id: i64,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::remove_event_favorite(conn, user_id, event_id))?;
    Ok(())
}

pub fn add_news_favorite(
    connections: &sqlite::Connections,
    user_id: i64,
    news_id: i64,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::add_news_favorite(conn, user_id, news_id))?;
    Ok(())
}

pub fn remove_news_favorite(
    connections: &sqlite::Connections,
    user_id: i64,
    news_id: i64,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::remove_news_favorite(conn, user_id, news_id))?;
    Ok(())
}
