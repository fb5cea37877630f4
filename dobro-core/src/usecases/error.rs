use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The city could not be found")]
    CityNotFound,
    #[error("The organization could not be found")]
    OrganizationNotFound,
    #[error("The event could not be found")]
    EventNotFound,
    #[error("The news entry could not be found")]
    NewsNotFound,
    #[error("Unknown category: {0}")]
    CategoryNotFound(String),
    #[error("The favorite could not be found")]
    FavoriteNotFound,
    #[error("The favorite already exists")]
    AlreadyFavorite,
    #[error("A city with this name already exists")]
    CityExists,
    #[error("A category with this name already exists")]
    CategoryExists,
    #[error("The login is already taken")]
    LoginTaken,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Invalid password")]
    Password,
    #[error("Invalid event state")]
    EventState,
    #[error("Invalid position")]
    Position,
    #[error("Invalid search pattern")]
    Pattern,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<dobro_entities::password::ParseError> for Error {
    fn from(_: dobro_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<dobro_entities::event::EventStateParseError> for Error {
    fn from(_: dobro_entities::event::EventStateParseError) -> Self {
        Self::EventState
    }
}

impl From<regex::Error> for Error {
    fn from(_: regex::Error) -> Self {
        Self::Pattern
    }
}
