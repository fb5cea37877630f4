mod mutations;
mod queries;

pub mod prelude {
    pub use dobro_core::{
        entities::*,
        gateways::auth::{AuthTokenDecoder, TokenData},
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    /// Token decoder for tests: `user-<id>` is a valid token for the
    /// user with that id, everything else is rejected.
    pub struct TestTokenDecoder;

    impl AuthTokenDecoder for TestTokenDecoder {
        fn decode_token(&self, token: &str) -> Option<TokenData> {
            let user_id = token.strip_prefix("user-")?.parse().ok()?;
            Some(TokenData {
                user_id,
                login: format!("user-{user_id}"),
            })
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub token_decoder: TestTokenDecoder,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            dobro_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap());
            Self {
                db_connections,
                token_decoder: TestTokenDecoder,
            }
        }

        pub fn create_city(&self, name: &str) -> City {
            flows::create_city(&self.db_connections, name).unwrap()
        }

        pub fn create_organization_category(&self, name: &str) -> Category {
            flows::create_category(&self.db_connections, CategoryKind::Organization, name, None)
                .unwrap()
        }

        pub fn create_event_category(&self, name: &str) -> Category {
            flows::create_category(&self.db_connections, CategoryKind::Event, name, None).unwrap()
        }

        pub fn register_user(&self, login: &str) -> User {
            flows::register_user(
                &self.db_connections,
                usecases::NewUser {
                    full_name: format!("Test user {login}"),
                    login: login.to_owned(),
                    password: "secret123".to_owned(),
                },
            )
            .unwrap()
        }
    }

    pub fn default_new_organization(city: &str) -> usecases::NewOrganization {
        usecases::NewOrganization {
            name: "Helping Hands".into(),
            description: None,
            logo: None,
            address: "Tverskaya 1".into(),
            city: city.into(),
            latitude: 55.75,
            longitude: 37.61,
            meta: None,
            categories: vec![],
        }
    }

    pub fn default_new_event(city: &str, nko_id: i64) -> usecases::NewEvent {
        usecases::NewEvent {
            nko_id,
            name: "Charity run".into(),
            description: None,
            address: None,
            city: city.into(),
            picture: None,
            latitude: None,
            longitude: None,
            starts_at: None,
            finish_at: None,
            state: None,
            meta: None,
            categories: vec![],
        }
    }
}
