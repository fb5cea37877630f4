// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CityRepo {
    fn create_city(&self, name: &str) -> Result<City>;
    fn get_city(&self, id: i64) -> Result<City>;
    fn try_get_city_by_name(&self, name: &str) -> Result<Option<City>>;
    fn all_cities(&self) -> Result<Vec<City>>;
    fn delete_city(&self, id: i64) -> Result<()>;
}

pub trait CategoryRepo {
    fn create_category(
        &self,
        kind: CategoryKind,
        name: &str,
        description: Option<&str>,
    ) -> Result<Category>;
    fn all_categories(&self, kind: CategoryKind) -> Result<Vec<Category>>;
    // Unknown names are skipped, not reported.
    fn get_categories_by_names(&self, kind: CategoryKind, names: &[String])
        -> Result<Vec<Category>>;
}

pub trait UserRepo {
    // The id of the given user is assigned by the store.
    fn create_user(&self, user: User) -> Result<User>;
    fn get_user(&self, id: i64) -> Result<User>;
    fn try_get_user_by_login(&self, login: &str) -> Result<Option<User>>;
}

/// Structured predicates for the organization resolver.
///
/// All present predicates are ANDed together; the category list itself
/// has match-any semantics. Free-text search is NOT part of this
/// filter, it is applied by the use case on top of the loaded rows.
#[derive(Debug, Clone, Default)]
pub struct OrganizationFilter {
    // Case-insensitive substring match on the city name.
    pub city: Option<String>,
    pub categories: Option<Vec<String>>,
    pub favorited_by: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub organizations: Option<Vec<i64>>,
    pub city: Option<String>,
    pub categories: Option<Vec<String>>,
    // Inclusive bounds on starts_at/finish_at.
    pub starts_after: Option<Timestamp>,
    pub finishes_before: Option<Timestamp>,
    pub favorited_by: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct NewsFilter {
    pub city: Option<String>,
    pub favorited_by: Option<i64>,
}

/// A fully denormalized organization as served to clients.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationRecord {
    pub organization: Organization,
    pub city: String,
    // Always the full set, never restricted to a category filter.
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub event: Event,
    pub organization_name: String,
    pub city: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsRecord {
    pub news: NewsItem,
    pub city: Option<String>,
}

pub trait OrganizationRepo {
    // The id of the given organization is assigned by the store.
    // The entity row and one link row per category are inserted
    // together; the caller provides the transaction boundary.
    fn create_organization(&self, org: Organization, category_ids: &[i64])
        -> Result<Organization>;

    fn get_organization(&self, id: i64) -> Result<(Organization, String)>;

    // Results are ordered by creation time, newest first.
    fn filter_organizations(
        &self,
        filter: &OrganizationFilter,
    ) -> Result<Vec<(Organization, String)>>;

    // Removes the category links and favorites of the organization
    // along with the organization itself.
    fn delete_organization(&self, id: i64) -> Result<()>;

    fn organization_category_names(&self, org_id: i64) -> Result<Vec<String>>;

    fn add_organization_favorite(&self, user_id: i64, org_id: i64) -> Result<()>;
    fn remove_organization_favorite(&self, user_id: i64, org_id: i64) -> Result<()>;

    fn zip_organizations_with_categories(
        &self,
        organizations: Vec<(Organization, String)>,
    ) -> Result<Vec<OrganizationRecord>> {
        let mut records = Vec::with_capacity(organizations.len());
        for (organization, city) in organizations {
            let categories = self.organization_category_names(organization.id)?;
            records.push(OrganizationRecord {
                organization,
                city,
                categories,
            });
        }
        Ok(records)
    }
}

pub trait EventRepo {
    // See OrganizationRepo::create_organization.
    fn create_event(&self, event: Event, category_ids: &[i64]) -> Result<Event>;

    // Loads the event together with its organization and city names.
    fn get_event(&self, id: i64) -> Result<(Event, String, String)>;

    // Results are ordered by creation time, newest first.
    fn filter_events(&self, filter: &EventFilter) -> Result<Vec<(Event, String, String)>>;

    fn delete_event(&self, id: i64) -> Result<()>;

    fn event_category_names(&self, event_id: i64) -> Result<Vec<String>>;

    fn add_event_favorite(&self, user_id: i64, event_id: i64) -> Result<()>;
    fn remove_event_favorite(&self, user_id: i64, event_id: i64) -> Result<()>;

    fn zip_events_with_categories(
        &self,
        events: Vec<(Event, String, String)>,
    ) -> Result<Vec<EventRecord>> {
        let mut records = Vec::with_capacity(events.len());
        for (event, organization_name, city) in events {
            let categories = self.event_category_names(event.id)?;
            records.push(EventRecord {
                event,
                organization_name,
                city,
                categories,
            });
        }
        Ok(records)
    }
}

pub trait NewsRepo {
    // The id of the given news item is assigned by the store.
    fn create_news(&self, news: NewsItem) -> Result<NewsItem>;

    // The city name is None for portal-wide entries.
    fn get_news(&self, id: i64) -> Result<(NewsItem, Option<String>)>;

    // Results are ordered by creation time, newest first.
    fn filter_news(&self, filter: &NewsFilter) -> Result<Vec<(NewsItem, Option<String>)>>;

    fn delete_news(&self, id: i64) -> Result<()>;

    fn add_news_favorite(&self, user_id: i64, news_id: i64) -> Result<()>;
    fn remove_news_favorite(&self, user_id: i64, news_id: i64) -> Result<()>;
}
