pub use dobro_boundary::*;

use dobro_core::{entities as e, repositories, usecases};

// NOTE:
// We cannot impl From<T> here, because the JSON structs
// and the entities both are outside this crate.

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    // Metadata is stored as an opaque string; only create payloads
    // that went through `from_json` are guaranteed to parse back.
    fn meta_value(meta: Option<String>) -> Option<serde_json::Value> {
        meta.and_then(|meta| serde_json::from_str(&meta).ok())
    }

    pub fn organization(record: repositories::OrganizationRecord) -> Organization {
        let repositories::OrganizationRecord {
            organization,
            city,
            categories,
        } = record;
        let e::Organization {
            id,
            name,
            description,
            logo,
            address,
            city_id: _,
            pos,
            meta,
            created_at,
        } = organization;
        Organization {
            id,
            name,
            description,
            logo,
            address,
            city,
            latitude: pos.lat_deg(),
            longitude: pos.lng_deg(),
            meta: meta_value(meta),
            created_at: created_at.into_seconds(),
            categories,
        }
    }

    pub fn event(record: repositories::EventRecord) -> Event {
        let repositories::EventRecord {
            event,
            organization_name,
            city,
            categories,
        } = record;
        let e::Event {
            id,
            nko_id,
            name,
            description,
            address,
            city_id: _,
            picture,
            pos,
            starts_at,
            finish_at,
            created_by,
            approved_by,
            state,
            meta,
            created_at,
        } = event;
        Event {
            id,
            nko_id,
            nko_name: organization_name,
            name,
            description,
            address,
            city,
            picture,
            latitude: pos.map(|pos| pos.lat_deg()),
            longitude: pos.map(|pos| pos.lng_deg()),
            starts_at: starts_at.map(e::Timestamp::into_seconds),
            finish_at: finish_at.map(e::Timestamp::into_seconds),
            created_by,
            approved_by,
            state: state.as_str().to_string(),
            meta,
            created_at: created_at.into_seconds(),
            categories,
        }
    }

    pub fn news(record: repositories::NewsRecord) -> News {
        let repositories::NewsRecord { news, city } = record;
        let e::NewsItem {
            id,
            title,
            description,
            image,
            city_id: _,
            created_by,
            approved_by,
            meta,
            created_at,
        } = news;
        News {
            id,
            title,
            description,
            image,
            city,
            created_by,
            approved_by,
            meta: meta_value(meta),
            created_at: created_at.into_seconds(),
        }
    }

    pub fn city(city: e::City) -> City {
        let e::City { id, name } = city;
        City { id, name }
    }

    pub fn category(category: e::Category) -> Category {
        let e::Category {
            id,
            name,
            description,
        } = category;
        Category {
            id,
            name,
            description,
        }
    }

    pub fn user(user: e::User) -> User {
        let e::User {
            id,
            full_name,
            login,
            password: _,
            role,
        } = user;
        User {
            id,
            full_name,
            login,
            role: role.as_str().to_string(),
        }
    }
}

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    fn meta_string(meta: Option<serde_json::Value>) -> Option<String> {
        meta.map(|meta| meta.to_string())
    }

    pub fn new_organization(from: NewOrganization) -> usecases::NewOrganization {
        let NewOrganization {
            name,
            description,
            logo,
            address,
            city,
            latitude,
            longitude,
            meta,
            categories,
        } = from;
        usecases::NewOrganization {
            name,
            description,
            logo,
            address,
            city,
            latitude,
            longitude,
            meta: meta_string(meta),
            categories,
        }
    }

    pub fn new_event(from: NewEvent) -> usecases::NewEvent {
        let NewEvent {
            nko_id,
            name,
            description,
            address,
            city,
            picture,
            latitude,
            longitude,
            starts_at,
            finish_at,
            state,
            meta,
            categories,
        } = from;
        usecases::NewEvent {
            nko_id,
            name,
            description,
            address,
            city,
            picture,
            latitude,
            longitude,
            starts_at,
            finish_at,
            state,
            meta,
            categories,
        }
    }

    pub fn new_news(from: NewNews) -> usecases::NewNews {
        let NewNews {
            title,
            description,
            image,
            city,
            meta,
        } = from;
        usecases::NewNews {
            title,
            description,
            image,
            city,
            meta: meta_string(meta),
        }
    }
}
