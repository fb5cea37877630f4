use crate::gateways::auth::AuthTokenDecoder;

mod categories;
mod cities;
mod create_event;
mod create_news;
mod create_organization;
mod delete_event;
mod delete_news;
mod delete_organization;
mod error;
mod favorites;
mod login;
mod query_events;
mod query_news;
mod query_organizations;
mod register;

pub use self::{
    categories::*, cities::*, create_event::*, create_news::*, create_organization::*,
    delete_event::*, delete_news::*, delete_organization::*, error::Error, favorites::*,
    login::*, query_events::*, query_news::*, query_organizations::*, register::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*, gateways::auth::*, repositories::Error as RepoError, repositories::*,
    };
}
use self::prelude::*;

pub fn get_user<R: UserRepo>(repo: &R, user_id: i64) -> Result<User> {
    repo.get_user(user_id).map_err(|err| match err {
        RepoError::NotFound => Error::Unauthorized,
        err => Error::Repo(err),
    })
}

// Best-effort resolution of the favorites constraint: a missing or
// unverifiable token silently disables the constraint instead of
// failing the request, so one endpoint serves both authenticated and
// anonymous callers.
pub(crate) fn resolve_favorites_user(
    auth: &dyn AuthTokenDecoder,
    favorites_only: bool,
    token: Option<&str>,
) -> Option<i64> {
    if !favorites_only {
        return None;
    }
    match token.and_then(|token| auth.decode_token(token)) {
        Some(data) => Some(data.user_id),
        None => {
            log::debug!("Favorites filter requested without a verifiable token, ignoring it");
            None
        }
    }
}

pub(crate) fn resolve_category_ids<R: CategoryRepo>(
    repo: &R,
    kind: CategoryKind,
    names: &[String],
) -> Result<Vec<i64>> {
    if names.is_empty() {
        return Ok(vec![]);
    }
    let categories = repo.get_categories_by_names(kind, names)?;
    for name in names {
        if !categories.iter().any(|c| &c.name == name) {
            return Err(Error::CategoryNotFound(name.clone()));
        }
    }
    Ok(categories.into_iter().map(|c| c.id).collect())
}

pub(crate) fn parse_position(latitude: Option<f64>, longitude: Option<f64>) -> Result<Option<MapPoint>> {
    match (latitude, longitude) {
        (Some(lat), Some(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng)
            .map(Some)
            .ok_or(Error::Position),
        (None, None) => Ok(None),
        // One half of a coordinate is meaningless.
        _ => Err(Error::Position),
    }
}
