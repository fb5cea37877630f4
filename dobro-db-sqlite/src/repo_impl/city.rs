use super::*;

impl<'a> CityRepo for DbReadOnly<'a> {
    fn create_city(&self, _name: &str) -> Result<City> {
        unreachable!();
    }
    fn get_city(&self, id: i64) -> Result<City> {
        get_city(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_city_by_name(&self, name: &str) -> Result<Option<City>> {
        try_get_city_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_cities(&self) -> Result<Vec<City>> {
        all_cities(&mut self.conn.borrow_mut())
    }
    fn delete_city(&self, _id: i64) -> Result<()> {
        unreachable!();
    }
}

impl<'a> CityRepo for DbReadWrite<'a> {
    fn create_city(&self, name: &str) -> Result<City> {
        create_city(&mut self.conn.borrow_mut(), name)
    }
    fn get_city(&self, id: i64) -> Result<City> {
        get_city(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_city_by_name(&self, name: &str) -> Result<Option<City>> {
        try_get_city_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_cities(&self) -> Result<Vec<City>> {
        all_cities(&mut self.conn.borrow_mut())
    }
    fn delete_city(&self, id: i64) -> Result<()> {
        delete_city(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> CityRepo for DbConnection<'a> {
    fn create_city(&self, name: &str) -> Result<City> {
        create_city(&mut self.conn.borrow_mut(), name)
    }
    fn get_city(&self, id: i64) -> Result<City> {
        get_city(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_city_by_name(&self, name: &str) -> Result<Option<City>> {
        try_get_city_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_cities(&self) -> Result<Vec<City>> {
        all_cities(&mut self.conn.borrow_mut())
    }
    fn delete_city(&self, id: i64) -> Result<()> {
        delete_city(&mut self.conn.borrow_mut(), id)
    }
}

fn create_city(conn: &mut SqliteConnection, name: &str) -> Result<City> {
    use schema::cities::dsl;
    diesel::insert_into(dsl::cities)
        .values(dsl::name.eq(name))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = assigned_row_id(conn)?;
    Ok(City {
        id,
        name: name.to_owned(),
    })
}

fn get_city(conn: &mut SqliteConnection, id: i64) -> Result<City> {
    use schema::cities::dsl;
    Ok(dsl::cities
        .filter(dsl::id.eq(id))
        .first::<models::CityEntity>(conn)
        .map(|models::CityEntity { id, name }| City { id, name })
        .map_err(from_diesel_err)?)
}

fn try_get_city_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<City>> {
    use schema::cities::dsl;
    Ok(dsl::cities
        .filter(dsl::name.eq(name))
        .first::<models::CityEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|models::CityEntity { id, name }| City { id, name }))
}

fn all_cities(conn: &mut SqliteConnection) -> Result<Vec<City>> {
    use schema::cities::dsl;
    Ok(dsl::cities
        .order_by(dsl::name.asc())
        .load::<models::CityEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::CityEntity { id, name }| City { id, name })
        .collect())
}

fn delete_city(conn: &mut SqliteConnection, id: i64) -> Result<()> {
    use schema::cities::dsl;
    let rows = diesel::delete(dsl::cities.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if rows == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
