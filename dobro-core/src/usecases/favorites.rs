use crate::usecases::prelude::*;

// Favorite toggles check that the target entity exists before
// touching the favorite row, so a missing entity is reported as
// not-found rather than as a dangling-favorite conflict.

pub fn add_organization_favorite<R: OrganizationRepo>(
    repo: &R,
    user_id: i64,
    org_id: i64,
) -> Result<()> {
    repo.get_organization(org_id).map_err(|err| match err {
        RepoError::NotFound => Error::OrganizationNotFound,
        err => Error::Repo(err),
    })?;
    repo.add_organization_favorite(user_id, org_id)
        .map_err(|err| match err {
            RepoError::AlreadyExists => Error::AlreadyFavorite,
            err => Error::Repo(err),
        })
}

pub fn remove_organization_favorite<R: OrganizationRepo>(
    repo: &R,
    user_id: i64,
    org_id: i64,
) -> Result<()> {
    repo.remove_organization_favorite(user_id, org_id)
        .map_err(|err| match err {
            RepoError::NotFound => Error::FavoriteNotFound,
            err => Error::Repo(err),
        })
}

pub fn organization_favorites<R: OrganizationRepo>(
    repo: &R,
    user_id: i64,
) -> Result<Vec<OrganizationRecord>> {
    let filter = OrganizationFilter {
        favorited_by: Some(user_id),
        ..Default::default()
    };
    let organizations = repo.filter_organizations(&filter)?;
    Ok(repo.zip_organizations_with_categories(organizations)?)
}

pub fn add_event_favorite<R: EventRepo>(repo: &R, user_id: i64, event_id: i64) -> Result<()> {
    repo.get_event(event_id).map_err(|err| match err {
        RepoError::NotFound => Error::EventNotFound,
        err => Error::Repo(err),
    })?;
    repo.add_event_favorite(user_id, event_id)
        .map_err(|err| match err {
            RepoError::AlreadyExists => Error::AlreadyFavorite,
            err => Error::Repo(err),
        })
}

pub fn remove_event_favorite<R: EventRepo>(repo: &R, user_id: i64, event_id: i64) -> Result<()> {
    repo.remove_event_favorite(user_id, event_id)
        .map_err(|err| match err {
            RepoError::NotFound => Error::FavoriteNotFound,
            err => Error::Repo(err),
        })
}

pub fn event_favorites<R: EventRepo>(repo: &R, user_id: i64) -> Result<Vec<EventRecord>> {
    let filter = EventFilter {
        favorited_by: Some(user_id),
        ..Default::default()
    };
    let events = repo.filter_events(&filter)?;
    Ok(repo.zip_events_with_categories(events)?)
}

pub fn add_news_favorite<R: NewsRepo>(repo: &R, user_id: i64, news_id: i64) -> Result<()> {
    repo.get_news(news_id).map_err(|err| match err {
        RepoError::NotFound => Error::NewsNotFound,
        err => Error::Repo(err),
    })?;
    repo.add_news_favorite(user_id, news_id)
        .map_err(|err| match err {
            RepoError::AlreadyExists => Error::AlreadyFavorite,
            err => Error::Repo(err),
        })
}

pub fn remove_news_favorite<R: NewsRepo>(repo: &R, user_id: i64, news_id: i64) -> Result<()> {
    repo.remove_news_favorite(user_id, news_id)
        .map_err(|err| match err {
            RepoError::NotFound => Error::FavoriteNotFound,
            err => Error::Repo(err),
        })
}

pub fn news_favorites<R: NewsRepo>(repo: &R, user_id: i64) -> Result<Vec<NewsRecord>> {
    let filter = NewsFilter {
        favorited_by: Some(user_id),
        ..Default::default()
    };
    Ok(repo
        .filter_news(&filter)?
        .into_iter()
        .map(|(news, city)| NewsRecord { news, city })
        .collect())
}
