// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use num_traits::FromPrimitive as _;

use dobro_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod category;
mod city;
mod event;
mod news;
mod organization;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn assigned_row_id(conn: &mut SqliteConnection) -> Result<i64> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_role(role: i16) -> Result<Role> {
    Role::from_i16(role).ok_or_else(|| anyhow!("Invalid user role: {role}").into())
}

fn load_event_state(state: i16) -> Result<EventState> {
    EventState::from_i16(state).ok_or_else(|| anyhow!("Invalid event state: {state}").into())
}

fn load_user(entity: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        id,
        full_name,
        login,
        password,
        role,
    } = entity;
    Ok(User {
        id,
        full_name,
        login,
        password: Password::from_hash(password),
        role: load_role(role)?,
    })
}

fn load_organization(entity: models::OrganizationEntity) -> Result<Organization> {
    let models::OrganizationEntity {
        id,
        name,
        description,
        logo,
        address,
        city_id,
        lat,
        lng,
        meta,
        created_at,
    } = entity;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or_else(|| anyhow!("Invalid coordinates of organization {id}: ({lat}, {lng})"))?;
    Ok(Organization {
        id,
        name,
        description,
        logo,
        address,
        city_id,
        pos,
        meta,
        created_at: Timestamp::from_milliseconds(created_at),
    })
}

fn load_event(entity: models::EventEntity) -> Result<Event> {
    let models::EventEntity {
        id,
        nko_id,
        name,
        description,
        address,
        city_id,
        picture,
        lat,
        lng,
        starts_at,
        finish_at,
        created_by,
        approved_by,
        state,
        meta,
        created_at,
    } = entity;
    let pos = match (lat, lng) {
        (Some(lat), Some(lng)) => Some(
            MapPoint::try_from_lat_lng_deg(lat, lng)
                .ok_or_else(|| anyhow!("Invalid coordinates of event {id}: ({lat}, {lng})"))?,
        ),
        _ => None,
    };
    Ok(Event {
        id,
        nko_id,
        name,
        description,
        address,
        city_id,
        picture,
        pos,
        starts_at: starts_at.map(Timestamp::from_milliseconds),
        finish_at: finish_at.map(Timestamp::from_milliseconds),
        created_by,
        approved_by,
        state: load_event_state(state)?,
        meta,
        created_at: Timestamp::from_milliseconds(created_at),
    })
}

fn load_news(entity: models::NewsEntity) -> NewsItem {
    let models::NewsEntity {
        id,
        title,
        description,
        image,
        city_id,
        created_by,
        approved_by,
        meta,
        created_at,
    } = entity;
    NewsItem {
        id,
        title,
        description,
        image,
        city_id,
        created_by,
        approved_by,
        meta,
        created_at: Timestamp::from_milliseconds(created_at),
    }
}

fn like_contains(needle: &str) -> String {
    // LIKE treats '%' and '_' as wildcards; escaping them keeps the
    // substring semantics literal.
    let escaped = needle.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
    format!("%{escaped}%")
}
