use crate::{text, usecases::prelude::*};

#[derive(Debug, Clone, Default)]
pub struct OrganizationQuery {
    pub city: Option<String>,
    pub categories: Option<Vec<String>>,
    pub pattern: Option<String>,
    pub favorites_only: bool,
    pub token: Option<String>,
}

pub fn query_organizations<R>(
    repo: &R,
    auth: &dyn AuthTokenDecoder,
    query: OrganizationQuery,
) -> Result<Vec<OrganizationRecord>>
where
    R: OrganizationRepo,
{
    let OrganizationQuery {
        city,
        categories,
        pattern,
        favorites_only,
        token,
    } = query;
    let pattern = pattern.as_deref().map(text::compile_search_pattern).transpose()?;
    let favorited_by = super::resolve_favorites_user(auth, favorites_only, token.as_deref());
    let filter = OrganizationFilter {
        city,
        categories,
        favorited_by,
    };
    let mut organizations = repo.filter_organizations(&filter)?;
    if let Some(pattern) = &pattern {
        organizations.retain(|(org, _)| {
            text::matches_name_or_description(pattern, &org.name, org.description.as_deref())
        });
    }
    Ok(repo.zip_organizations_with_categories(organizations)?)
}

pub fn get_organization<R: OrganizationRepo>(repo: &R, id: i64) -> Result<OrganizationRecord> {
    let (organization, city) = repo.get_organization(id).map_err(|err| match err {
        RepoError::NotFound => Error::OrganizationNotFound,
        err => Error::Repo(err),
    })?;
    let categories = repo.organization_category_names(organization.id)?;
    Ok(OrganizationRecord {
        organization,
        city,
        categories,
    })
}
