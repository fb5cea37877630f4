use crate::usecases::prelude::*;

/// Parameters for a new organization, with the city and the
/// categories still referenced by name.
#[derive(Debug, Clone)]
pub struct NewOrganization {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub address: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub meta: Option<String>,
    pub categories: Vec<String>,
}

pub fn create_organization<R>(repo: &R, new_org: NewOrganization) -> Result<OrganizationRecord>
where
    R: OrganizationRepo + CityRepo + CategoryRepo,
{
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
    } = new_org;
    let city = repo.try_get_city_by_name(&city)?.ok_or(Error::CityNotFound)?;
    let category_ids = super::resolve_category_ids(repo, CategoryKind::Organization, &categories)?;
    let pos = MapPoint::try_from_lat_lng_deg(latitude, longitude).ok_or(Error::Position)?;
    let organization = Organization {
        // Assigned by the store on insert.
        id: 0,
        name,
        description,
        logo,
        address,
        city_id: city.id,
        pos,
        meta,
        created_at: Timestamp::now(),
    };
    let organization = repo.create_organization(organization, &category_ids)?;
    log::info!("Created organization {} ('{}')", organization.id, organization.name);
    let categories = repo.organization_category_names(organization.id)?;
    Ok(OrganizationRecord {
        organization,
        city: city.name,
        categories,
    })
}
