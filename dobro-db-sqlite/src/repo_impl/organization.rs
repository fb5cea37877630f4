use super::*;

impl<'a> OrganizationRepo for DbReadOnly<'a> {
    fn create_organization(
        &self,
        _org: Organization,
        _category_ids: &[i64],
    ) -> Result<Organization> {
        unreachable!();
    }
    fn get_organization(&self, id: i64) -> Result<(Organization, String)> {
        get_organization(&mut self.conn.borrow_mut(), id)
    }
    fn filter_organizations(
        &self,
        filter: &OrganizationFilter,
    ) -> Result<Vec<(Organization, String)>> {
        filter_organizations(&mut self.conn.borrow_mut(), filter)
    }
    fn delete_organization(&self, _id: i64) -> Result<()> {
        unreachable!();
    }
    fn organization_category_names(&self, org_id: i64) -> Result<Vec<String>> {
        organization_category_names(&mut self.conn.borrow_mut(), org_id)
    }
    fn add_organization_favorite(&self, _user_id: i64, _org_id: i64) -> Result<()> {
        unreachable!();
    }
    fn remove_organization_favorite(&self, _user_id: i64, _org_id: i64) -> Result<()> {
        unreachable!();
    }
}

impl<'a> OrganizationRepo for DbReadWrite<'a> {
    fn create_organization(&self, org: Organization, category_ids: &[i64]) -> Result<Organization> {
        create_organization(&mut self.conn.borrow_mut(), org, category_ids)
    }
    fn get_organization(&self, id: i64) -> Result<(Organization, String)> {
        get_organization(&mut self.conn.borrow_mut(), id)
    }
    fn filter_organizations(
        &self,
        filter: &OrganizationFilter,
    ) -> Result<Vec<(Organization, String)>> {
        filter_organizations(&mut self.conn.borrow_mut(), filter)
    }
    fn delete_organization(&self, id: i64) -> Result<()> {
        delete_organization(&mut self.conn.borrow_mut(), id)
    }
    fn organization_category_names(&self, org_id: i64) -> Result<Vec<String>> {
        organization_category_names(&mut self.conn.borrow_mut(), org_id)
    }
    fn add_organization_favorite(&self, user_id: i64, org_id: i64) -> Result<()> {
        add_organization_favorite(&mut self.conn.borrow_mut(), user_id, org_id)
    }
    fn remove_organization_favorite(&self, user_id: i64, org_id: i64) -> Result<()> {
        remove_organization_favorite(&mut self.conn.borrow_mut(), user_id, org_id)
    }
}

impl<'a> OrganizationRepo for DbConnection<'a> {
    fn create_organization(&self, org: Organization, category_ids: &[i64]) -> Result<Organization> {
        create_organization(&mut self.conn.borrow_mut(), org, category_ids)
    }
    fn get_organization(&self, id: i64) -> Result<(Organization, String)> {
        get_organization(&mut self.conn.borrow_mut(), id)
    }
    fn filter_organizations(
        &self,
        filter: &OrganizationFilter,
    ) -> Result<Vec<(Organization, String)>> {
        filter_organizations(&mut self.conn.borrow_mut(), filter)
    }
    fn delete_organization(&self, id: i64) -> Result<()> {
        delete_organization(&mut self.conn.borrow_mut(), id)
    }
    fn organization_category_names(&self, org_id: i64) -> Result<Vec<String>> {
        organization_category_names(&mut self.conn.borrow_mut(), org_id)
    }
    fn add_organization_favorite(&self, user_id: i64, org_id: i64) -> Result<()> {
        add_organization_favorite(&mut self.conn.borrow_mut(), user_id, org_id)
    }
    fn remove_organization_favorite(&self, user_id: i64, org_id: i64) -> Result<()> {
        remove_organization_favorite(&mut self.conn.borrow_mut(), user_id, org_id)
    }
}

fn create_organization(
    conn: &mut SqliteConnection,
    org: Organization,
    category_ids: &[i64],
) -> Result<Organization> {
    let new_org = models::NewOrganization {
        name: &org.name,
        description: org.description.as_deref(),
        logo: org.logo.as_deref(),
        address: &org.address,
        city_id: org.city_id,
        lat: org.pos.lat_deg(),
        lng: org.pos.lng_deg(),
        meta: org.meta.as_deref(),
        created_at: org.created_at.into_milliseconds(),
    };
    diesel::insert_into(schema::organizations::table)
        .values(&new_org)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = assigned_row_id(conn)?;
    if !category_ids.is_empty() {
        use schema::organization_category_links::dsl;
        let links: Vec<_> = category_ids
            .iter()
            .map(|category_id| (dsl::org_id.eq(id), dsl::category_id.eq(*category_id)))
            .collect();
        diesel::insert_into(dsl::organization_category_links)
            .values(&links)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(Organization { id, ..org })
}

fn get_organization(conn: &mut SqliteConnection, id: i64) -> Result<(Organization, String)> {
    use schema::{cities, organizations};
    let (entity, city) = organizations::table
        .inner_join(cities::table)
        .filter(organizations::dsl::id.eq(id))
        .select((organizations::all_columns, cities::dsl::name))
        .first::<(models::OrganizationEntity, String)>(conn)
        .map_err(from_diesel_err)?;
    Ok((load_organization(entity)?, city))
}

fn filter_organizations(
    conn: &mut SqliteConnection,
    filter: &OrganizationFilter,
) -> Result<Vec<(Organization, String)>> {
    use schema::{cities, organizations};
    let mut query = organizations::table
        .inner_join(cities::table)
        .select((organizations::all_columns, cities::dsl::name))
        .order_by(organizations::dsl::created_at.desc())
        // Tie-break on the id for entities created within the same
        // millisecond.
        .then_order_by(organizations::dsl::id.desc())
        .into_boxed();
    if let Some(city) = &filter.city {
        query = query.filter(cities::dsl::name.like(like_contains(city)).escape('\\'));
    }
    if let Some(names) = &filter.categories {
        let ids = organization_ids_with_any_category(conn, names)?;
        query = query.filter(organizations::dsl::id.eq_any(ids));
    }
    if let Some(user_id) = filter.favorited_by {
        let ids = favorite_organization_ids(conn, user_id)?;
        query = query.filter(organizations::dsl::id.eq_any(ids));
    }
    query
        .load::<(models::OrganizationEntity, String)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(entity, city)| Ok((load_organization(entity)?, city)))
        .collect()
}

fn organization_ids_with_any_category(
    conn: &mut SqliteConnection,
    names: &[String],
) -> Result<Vec<i64>> {
    use schema::{organization_categories as categories, organization_category_links as links};
    links::table
        .inner_join(categories::table)
        .filter(categories::dsl::name.eq_any(names))
        .select(links::dsl::org_id)
        .distinct()
        .load::<i64>(conn)
        .map_err(from_diesel_err)
}

fn favorite_organization_ids(conn: &mut SqliteConnection, user_id: i64) -> Result<Vec<i64>> {
    use schema::favorite_organizations::dsl;
    dsl::favorite_organizations
        .filter(dsl::user_id.eq(user_id))
        .select(dsl::org_id)
        .load::<i64>(conn)
        .map_err(from_diesel_err)
}

fn delete_organization(conn: &mut SqliteConnection, id: i64) -> Result<()> {
    // Links and favorites first, then the entity row itself.
    {
        use schema::organization_category_links::dsl;
        diesel::delete(dsl::organization_category_links.filter(dsl::org_id.eq(id)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    {
        use schema::favorite_organizations::dsl;
        diesel::delete(dsl::favorite_organizations.filter(dsl::org_id.eq(id)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    use schema::organizations::dsl;
    let rows = diesel::delete(dsl::organizations.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if rows == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn organization_category_names(conn: &mut SqliteConnection, org_id: i64) -> Result<Vec<String>> {
    use schema::{organization_categories as categories, organization_category_links as links};
    links::table
        .inner_join(categories::table)
        .filter(links::dsl::org_id.eq(org_id))
        .select(categories::dsl::name)
        .order_by(categories::dsl::name.asc())
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn add_organization_favorite(conn: &mut SqliteConnection, user_id: i64, org_id: i64) -> Result<()> {
    use schema::favorite_organizations::dsl;
    diesel::insert_into(dsl::favorite_organizations)
        .values((dsl::user_id.eq(user_id), dsl::org_id.eq(org_id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn remove_organization_favorite(
    conn: &mut SqliteConnection,
    user_id: i64,
    org_id: i64,
) -> Result<()> {
    use schema::favorite_organizations::dsl;
    let rows = diesel::delete(
        dsl::favorite_organizations
            .filter(dsl::user_id.eq(user_id))
            .filter(dsl::org_id.eq(org_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if rows == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
