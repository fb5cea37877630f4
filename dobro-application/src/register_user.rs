use super::*;
use usecases::NewUser;

pub fn register_user(connections: &sqlite::Connections, new_user: NewUser) -> Result<User> {
    let mut connection = connections.exclusive()?;
    let user = connection.transaction(|conn| usecases::register(conn, new_user))?;
    Ok(user)
}
