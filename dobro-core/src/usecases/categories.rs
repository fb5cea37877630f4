use crate::usecases::prelude::*;

pub fn query_categories<R: CategoryRepo>(repo: &R, kind: CategoryKind) -> Result<Vec<Category>> {
    Ok(repo.all_categories(kind)?)
}

pub fn create_category<R: CategoryRepo>(
    repo: &R,
    kind: CategoryKind,
    name: &str,
    description: Option<&str>,
) -> Result<Category> {
    repo.create_category(kind, name, description)
        .map_err(|err| match err {
            RepoError::AlreadyExists => Error::CategoryExists,
            err => Error::Repo(err),
        })
}
