//! Transactional flows around the domain use cases.
//!
//! Mutations run inside a database transaction so that paired writes
//! (entity + category links, links + entity) commit or roll back as a
//! unit. Read-only operations are served by the use cases directly on
//! a shared connection.

#[macro_use]
extern crate log;

mod create_event;
mod create_news;
mod create_organization;
mod delete_event;
mod delete_news;
mod delete_organization;
mod favorites;
mod manage_categories;
mod manage_cities;
mod register_user;

pub mod prelude {
    pub use super::{
        create_event::*, create_news::*, create_organization::*, delete_event::*, delete_news::*,
        delete_organization::*, favorites::*, manage_categories::*, manage_cities::*,
        register_user::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use dobro_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use dobro_db_sqlite::Connections;
}
