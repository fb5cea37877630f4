use super::*;

pub fn delete_organization(connections: &sqlite::Connections, id: i64) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_organization(conn, id))?;
    Ok(())
}
