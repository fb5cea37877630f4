use super::*;
use usecases::NewOrganization;

pub fn create_organization(
    connections: &sqlite::Connections,
    new_org: NewOrganization,
) -> Result<OrganizationRecord> {
    let mut connection = connections.exclusive()?;
    let record = connection.transaction(|conn| {
        usecases::create_organization(conn, new_org).map_err(|err| {
            warn!("Failed to create organization: {err}");
            err
        })
    })?;
    Ok(record)
}
