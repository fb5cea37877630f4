use super::*;

pub fn delete_news(connections: &sqlite::Connections, id: i64) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_news(conn, id))?;
    Ok(())
}
