use super::*;

pub fn create_city(connections: &sqlite::Connections, name: &str) -> Result<City> {
    let mut connection = connections.exclusive()?;
    let city = connection.transaction(|conn| usecases::create_city(conn, name))?;
    Ok(city)
}

pub fn delete_city(connections: &sqlite::Connections, id: i64) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_city(conn, id))?;
    Ok(())
}
