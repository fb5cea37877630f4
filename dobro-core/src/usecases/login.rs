use crate::usecases::prelude::*;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

pub fn login<R: UserRepo>(repo: &R, credentials: &Credentials) -> Result<User> {
    let user = repo
        .try_get_user_by_login(&credentials.login)?
        .ok_or(Error::Credentials)?;
    if !user.password.verify(&credentials.password) {
        return Err(Error::Credentials);
    }
    Ok(user)
}
