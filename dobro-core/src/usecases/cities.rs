use crate::{text, usecases::prelude::*};

pub fn query_cities<R: CityRepo>(repo: &R, pattern: Option<&str>) -> Result<Vec<City>> {
    let pattern = pattern.map(text::compile_search_pattern).transpose()?;
    let mut cities = repo.all_cities()?;
    if let Some(pattern) = &pattern {
        cities.retain(|city| pattern.is_match(&city.name));
    }
    Ok(cities)
}

pub fn create_city<R: CityRepo>(repo: &R, name: &str) -> Result<City> {
    repo.create_city(name).map_err(|err| match err {
        RepoError::AlreadyExists => Error::CityExists,
        err => Error::Repo(err),
    })
}

/// Looks up a city by its id or, failing a numeric parse, by name.
pub fn get_city<R: CityRepo>(repo: &R, key: &str) -> Result<City> {
    if let Ok(id) = key.parse::<i64>() {
        return repo.get_city(id).map_err(|err| match err {
            RepoError::NotFound => Error::CityNotFound,
            err => Error::Repo(err),
        });
    }
    repo.try_get_city_by_name(key)?.ok_or(Error::CityNotFound)
}

pub fn delete_city<R: CityRepo>(repo: &R, id: i64) -> Result<()> {
    repo.delete_city(id).map_err(|err| match err {
        RepoError::NotFound => Error::CityNotFound,
        err => Error::Repo(err),
    })
}
