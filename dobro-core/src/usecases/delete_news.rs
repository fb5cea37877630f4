use crate::usecases::prelude::*;

pub fn delete_news<R: NewsRepo>(repo: &R, id: i64) -> Result<()> {
    repo.delete_news(id).map_err(|err| match err {
        RepoError::NotFound => Error::NewsNotFound,
        err => Error::Repo(err),
    })?;
    log::info!("Deleted news entry {id}");
    Ok(())
}
