//! Domain layer of the portal: repository traits, gateway traits and
//! all use cases, free of any I/O or framework concerns.

pub mod entities {
    pub use dobro_entities::{
        category::*, city::*, event::*, geo::*, news::*, organization::*, password::*, time::*,
        user::*,
    };
}

pub mod gateways;
pub mod repositories;
pub mod text;
pub mod usecases;
