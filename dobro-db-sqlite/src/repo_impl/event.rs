use super::*;

impl<'a> EventRepo for DbReadOnly<'a> {
    fn create_event(&self, _event: Event, _category_ids: &[i64]) -> Result<Event> {
        unreachable!();
    }
    fn get_event(&self, id: i64) -> Result<(Event, String, String)> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn filter_events(&self, filter: &EventFilter) -> Result<Vec<(Event, String, String)>> {
        filter_events(&mut self.conn.borrow_mut(), filter)
    }
    fn delete_event(&self, _id: i64) -> Result<()> {
        unreachable!();
    }
    fn event_category_names(&self, event_id: i64) -> Result<Vec<String>> {
        event_category_names(&mut self.conn.borrow_mut(), event_id)
    }
    fn add_event_favorite(&self, _user_id: i64, _event_id: i64) -> Result<()> {
        unreachable!();
    }
    fn remove_event_favorite(&self, _user_id: i64, _event_id: i64) -> Result<()> {
        unreachable!();
    }
}

impl<'a> EventRepo for DbReadWrite<'a> {
    fn create_event(&self, event: Event, category_ids: &[i64]) -> Result<Event> {
        create_event(&mut self.conn.borrow_mut(), event, category_ids)
    }
    fn get_event(&self, id: i64) -> Result<(Event, String, String)> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn filter_events(&self, filter: &EventFilter) -> Result<Vec<(Event, String, String)>> {
        filter_events(&mut self.conn.borrow_mut(), filter)
    }
    fn delete_event(&self, id: i64) -> Result<()> {
        delete_event(&mut self.conn.borrow_mut(), id)
    }
    fn event_category_names(&self, event_id: i64) -> Result<Vec<String>> {
        event_category_names(&mut self.conn.borrow_mut(), event_id)
    }
    fn add_event_favorite(&self, user_id: i64, event_id: i64) -> Result<()> {
        add_event_favorite(&mut self.conn.borrow_mut(), user_id, event_id)
    }
    fn remove_event_favorite(&self, user_id: i64, event_id: i64) -> Result<()> {
        remove_event_favorite(&mut self.conn.borrow_mut(), user_id, event_id)
    }
}

impl<'a> EventRepo for DbConnection<'a> {
    fn create_event(&self, event: Event, category_ids: &[i64]) -> Result<Event> {
        create_event(&mut self.conn.borrow_mut(), event, category_ids)
    }
    fn get_event(&self, id: i64) -> Result<(Event, String, String)> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn filter_events(&self, filter: &EventFilter) -> Result<Vec<(Event, String, String)>> {
        filter_events(&mut self.conn.borrow_mut(), filter)
    }
    fn delete_event(&self, id: i64) -> Result<()> {
        delete_event(&mut self.conn.borrow_mut(), id)
    }
    fn event_category_names(&self, event_id: i64) -> Result<Vec<String>> {
        event_category_names(&mut self.conn.borrow_mut(), event_id)
    }
    fn add_event_favorite(&self, user_id: i64, event_id: i64) -> Result<()> {
        add_event_favorite(&mut self.conn.borrow_mut(), user_id, event_id)
    }
    fn remove_event_favorite(&self, user_id: i64, event_id: i64) -> Result<()> {
        remove_event_favorite(&mut self.conn.borrow_mut(), user_id, event_id)
    }
}

fn create_event(conn: &mut SqliteConnection, event: Event, category_ids: &[i64]) -> Result<Event> {
    let new_event = models::NewEvent {
        nko_id: event.nko_id,
        name: &event.name,
        description: event.description.as_deref(),
        address: event.address.as_deref(),
        city_id: event.city_id,
        picture: event.picture.as_deref(),
        lat: event.pos.map(|pos| pos.lat_deg()),
        lng: event.pos.map(|pos| pos.lng_deg()),
        starts_at: event.starts_at.map(Timestamp::into_milliseconds),
        finish_at: event.finish_at.map(Timestamp::into_milliseconds),
        created_by: event.created_by,
        approved_by: event.approved_by,
        state: event.state as i16,
        meta: event.meta.as_deref(),
        created_at: event.created_at.into_milliseconds(),
    };
    diesel::insert_into(schema::events::table)
        .values(&new_event)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = assigned_row_id(conn)?;
    if !category_ids.is_empty() {
        use schema::event_category_links::dsl;
        let links: Vec<_> = category_ids
            .iter()
            .map(|category_id| (dsl::event_id.eq(id), dsl::category_id.eq(*category_id)))
            .collect();
        diesel::insert_into(dsl::event_category_links)
            .values(&links)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(Event { id, ..event })
}

fn get_event(conn: &mut SqliteConnection, id: i64) -> Result<(Event, String, String)> {
    use schema::{cities, events, organizations};
    let (entity, organization_name, city) = events::table
        .inner_join(organizations::table)
        .inner_join(cities::table)
        .filter(events::dsl::id.eq(id))
        .select((
            events::all_columns,
            organizations::dsl::name,
            cities::dsl::name,
        ))
        .first::<(models::EventEntity, String, String)>(conn)
        .map_err(from_diesel_err)?;
    Ok((load_event(entity)?, organization_name, city))
}

fn filter_events(
    conn: &mut SqliteConnection,
    filter: &EventFilter,
) -> Result<Vec<(Event, String, String)>> {
    use schema::{cities, events, organizations};
    let mut query = events::table
        .inner_join(organizations::table)
        .inner_join(cities::table)
        .select((
            events::all_columns,
            organizations::dsl::name,
            cities::dsl::name,
        ))
        .order_by(events::dsl::created_at.desc())
        .then_order_by(events::dsl::id.desc())
        .into_boxed();
    if let Some(nko_ids) = &filter.organizations {
        query = query.filter(events::dsl::nko_id.eq_any(nko_ids.clone()));
    }
    if let Some(city) = &filter.city {
        query = query.filter(cities::dsl::name.like(like_contains(city)).escape('\\'));
    }
    if let Some(names) = &filter.categories {
        let ids = event_ids_with_any_category(conn, names)?;
        query = query.filter(events::dsl::id.eq_any(ids));
    }
    // NULL time stamps never satisfy a bound, so open-ended events
    // drop out of a time-constrained search.
    if let Some(starts_after) = filter.starts_after {
        query = query.filter(events::dsl::starts_at.ge(starts_after.into_milliseconds()));
    }
    if let Some(finishes_before) = filter.finishes_before {
        query = query.filter(events::dsl::finish_at.le(finishes_before.into_milliseconds()));
    }
    if let Some(user_id) = filter.favorited_by {
        let ids = favorite_event_ids(conn, user_id)?;
        query = query.filter(events::dsl::id.eq_any(ids));
    }
    query
        .load::<(models::EventEntity, String, String)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(entity, organization_name, city)| Ok((load_event(entity)?, organization_name, city)))
        .collect()
}

fn event_ids_with_any_category(conn: &mut SqliteConnection, names: &[String]) -> Result<Vec<i64>> {
    use schema::{event_categories as categories, event_category_links as links};
    links::table
        .inner_join(categories::table)
        .filter(categories::dsl::name.eq_any(names))
        .select(links::dsl::event_id)
        .distinct()
        .load::<i64>(conn)
        .map_err(from_diesel_err)
}

fn favorite_event_ids(conn: &mut SqliteConnection, user_id: i64) -> Result<Vec<i64>> {
    use schema::favorite_events::dsl;
    dsl::favorite_events
        .filter(dsl::user_id.eq(user_id))
        .select(dsl::event_id)
        .load::<i64>(conn)
        .map_err(from_diesel_err)
}

fn delete_event(conn: &mut SqliteConnection, id: i64) -> Result<()> {
    // Links and favorites first, then the entity row itself.
    {
        use schema::event_category_links::dsl;
        diesel::delete(dsl::event_category_links.filter(dsl::event_id.eq(id)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    {
        use schema::favorite_events::dsl;
        diesel::delete(dsl::favorite_events.filter(dsl::event_id.eq(id)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    use schema::events::dsl;
    let rows = diesel::delete(dsl::events.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if rows == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn event_category_names(conn: &mut SqliteConnection, event_id: i64) -> Result<Vec<String>> {
    use schema::{event_categories as categories, event_category_links as links};
    links::table
        .inner_join(categories::table)
        .filter(links::dsl::event_id.eq(event_id))
        .select(categories::dsl::name)
        .order_by(categories::dsl::name.asc())
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn add_event_favorite(conn: &mut SqliteConnection, user_id: i64, event_id: i64) -> Result<()> {
    use schema::favorite_events::dsl;
    diesel::insert_into(dsl::favorite_events)
        .values((dsl::user_id.eq(user_id), dsl::event_id.eq(event_id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn remove_event_favorite(conn: &mut SqliteConnection, user_id: i64, event_id: i64) -> Result<()> {
    use schema::favorite_events::dsl;
    let rows = diesel::delete(
        dsl::favorite_events
            .filter(dsl::user_id.eq(user_id))
            .filter(dsl::event_id.eq(event_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if rows == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
