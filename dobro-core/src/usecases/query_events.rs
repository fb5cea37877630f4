use crate::{text, usecases::prelude::*};

#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub organizations: Option<Vec<i64>>,
    pub city: Option<String>,
    pub categories: Option<Vec<String>>,
    pub starts_after: Option<Timestamp>,
    pub finishes_before: Option<Timestamp>,
    pub pattern: Option<String>,
    pub favorites_only: bool,
    pub token: Option<String>,
}

pub fn query_events<R>(
    repo: &R,
    auth: &dyn AuthTokenDecoder,
    query: EventQuery,
) -> Result<Vec<EventRecord>>
where
    R: EventRepo,
{
    let EventQuery {
        organizations,
        city,
        categories,
        starts_after,
        finishes_before,
        pattern,
        favorites_only,
        token,
    } = query;
    let pattern = pattern.as_deref().map(text::compile_search_pattern).transpose()?;
    let favorited_by = super::resolve_favorites_user(auth, favorites_only, token.as_deref());
    let filter = EventFilter {
        organizations,
        city,
        categories,
        starts_after,
        finishes_before,
        favorited_by,
    };
    let mut events = repo.filter_events(&filter)?;
    if let Some(pattern) = &pattern {
        events.retain(|(event, _, _)| {
            text::matches_name_or_description(pattern, &event.name, event.description.as_deref())
        });
    }
    Ok(repo.zip_events_with_categories(events)?)
}

pub fn get_event<R: EventRepo>(repo: &R, id: i64) -> Result<EventRecord> {
    let (event, organization_name, city) = repo.get_event(id).map_err(|err| match err {
        RepoError::NotFound => Error::EventNotFound,
        err => Error::Repo(err),
    })?;
    let categories = repo.event_category_names(event.id)?;
    Ok(EventRecord {
        event,
        organization_name,
        city,
        categories,
    })
}
