use crate::usecases::prelude::*;

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub nko_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: String,
    pub picture: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    // Unix timestamps in seconds.
    pub starts_at: Option<i64>,
    pub finish_at: Option<i64>,
    pub state: Option<String>,
    pub meta: Option<String>,
    pub categories: Vec<String>,
}

pub fn create_event<R>(repo: &R, created_by: i64, new_event: NewEvent) -> Result<EventRecord>
where
    R: EventRepo + OrganizationRepo + CityRepo + CategoryRepo,
{
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
    } = new_event;
    let city = repo.try_get_city_by_name(&city)?.ok_or(Error::CityNotFound)?;
    let (organization, _) = repo.get_organization(nko_id).map_err(|err| match err {
        RepoError::NotFound => Error::OrganizationNotFound,
        err => Error::Repo(err),
    })?;
    let category_ids = super::resolve_category_ids(repo, CategoryKind::Event, &categories)?;
    let pos = super::parse_position(latitude, longitude)?;
    let state = state
        .as_deref()
        .map(str::parse)
        .transpose()?
        .unwrap_or(EventState::Draft);
    let event = Event {
        // Assigned by the store on insert.
        id: 0,
        nko_id: organization.id,
        name,
        description,
        address,
        city_id: city.id,
        picture,
        pos,
        starts_at: starts_at.map(Timestamp::from_seconds),
        finish_at: finish_at.map(Timestamp::from_seconds),
        created_by,
        approved_by: None,
        state,
        meta,
        created_at: Timestamp::now(),
    };
    let event = repo.create_event(event, &category_ids)?;
    log::info!("Created event {} ('{}')", event.id, event.name);
    let categories = repo.event_category_names(event.id)?;
    Ok(EventRecord {
        event,
        organization_name: organization.name,
        city: city.name,
        categories,
    })
}
