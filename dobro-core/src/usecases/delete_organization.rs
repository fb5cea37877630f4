use crate::usecases::prelude::*;

pub fn delete_organization<R: OrganizationRepo>(repo: &R, id: i64) -> Result<()> {
    repo.delete_organization(id).map_err(|err| match err {
        RepoError::NotFound => Error::OrganizationNotFound,
        err => Error::Repo(err),
    })?;
    log::info!("Deleted organization {id}");
    Ok(())
}
