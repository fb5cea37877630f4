use super::*;

pub fn delete_event(connections: &sqlite::Connections, id: i64) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_event(conn, id))?;
    Ok(())
}
