use super::*;

pub fn create_category(
    connections: &sqlite::Connections,
    kind: CategoryKind,
    name: &str,
    description: Option<&str>,
) -> Result<Category> {
    let mut connection = connections.exclusive()?;
    let category =
        connection.transaction(|conn| usecases::create_category(conn, kind, name, description))?;
    Ok(category)
}
