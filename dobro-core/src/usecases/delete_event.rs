use crate::usecases::prelude::*;

pub fn delete_event<R: EventRepo>(repo: &R, id: i64) -> Result<()> {
    repo.delete_event(id).map_err(|err| match err {
        RepoError::NotFound => Error::EventNotFound,
        err => Error::Repo(err),
    })?;
    log::info!("Deleted event {id}");
    Ok(())
}
