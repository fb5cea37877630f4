use crate::usecases::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub login: String,
    pub password: String,
}

pub fn register<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    let NewUser {
        full_name,
        login,
        password,
    } = new_user;
    if repo.try_get_user_by_login(&login)?.is_some() {
        return Err(Error::LoginTaken);
    }
    let password = password.parse::<Password>()?;
    let user = User {
        // Assigned by the store on insert.
        id: 0,
        full_name,
        login,
        password,
        // Elevated roles are granted out of band, never at sign-up.
        role: Role::default(),
    };
    let user = repo.create_user(user).map_err(|err| match err {
        // Lost the uniqueness race against a concurrent sign-up.
        RepoError::AlreadyExists => Error::LoginTaken,
        err => Error::Repo(err),
    })?;
    log::info!("Registered user {} ('{}')", user.id, user.login);
    Ok(user)
}
