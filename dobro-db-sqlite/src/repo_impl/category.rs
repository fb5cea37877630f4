use super::*;

impl<'a> CategoryRepo for DbReadOnly<'a> {
    fn create_category(
        &self,
        _kind: CategoryKind,
        _name: &str,
        _description: Option<&str>,
    ) -> Result<Category> {
        unreachable!();
    }
    fn all_categories(&self, kind: CategoryKind) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut(), kind)
    }
    fn get_categories_by_names(
        &self,
        kind: CategoryKind,
        names: &[String],
    ) -> Result<Vec<Category>> {
        get_categories_by_names(&mut self.conn.borrow_mut(), kind, names)
    }
}

impl<'a> CategoryRepo for DbReadWrite<'a> {
    fn create_category(
        &self,
        kind: CategoryKind,
        name: &str,
        description: Option<&str>,
    ) -> Result<Category> {
        create_category(&mut self.conn.borrow_mut(), kind, name, description)
    }
    fn all_categories(&self, kind: CategoryKind) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut(), kind)
    }
    fn get_categories_by_names(
        &self,
        kind: CategoryKind,
        names: &[String],
    ) -> Result<Vec<Category>> {
        get_categories_by_names(&mut self.conn.borrow_mut(), kind, names)
    }
}

impl<'a> CategoryRepo for DbConnection<'a> {
    fn create_category(
        &self,
        kind: CategoryKind,
        name: &str,
        description: Option<&str>,
    ) -> Result<Category> {
        create_category(&mut self.conn.borrow_mut(), kind, name, description)
    }
    fn all_categories(&self, kind: CategoryKind) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut(), kind)
    }
    fn get_categories_by_names(
        &self,
        kind: CategoryKind,
        names: &[String],
    ) -> Result<Vec<Category>> {
        get_categories_by_names(&mut self.conn.borrow_mut(), kind, names)
    }
}

fn create_category(
    conn: &mut SqliteConnection,
    kind: CategoryKind,
    name: &str,
    description: Option<&str>,
) -> Result<Category> {
    match kind {
        CategoryKind::Organization => {
            use schema::organization_categories::dsl;
            diesel::insert_into(dsl::organization_categories)
                .values((dsl::name.eq(name), dsl::description.eq(description)))
                .execute(conn)
                .map_err(from_diesel_err)?;
        }
        CategoryKind::Event => {
            use schema::event_categories::dsl;
            diesel::insert_into(dsl::event_categories)
                .values((dsl::name.eq(name), dsl::description.eq(description)))
                .execute(conn)
                .map_err(from_diesel_err)?;
        }
    }
    let id = assigned_row_id(conn)?;
    Ok(Category {
        id,
        name: name.to_owned(),
        description: description.map(ToOwned::to_owned),
    })
}

fn all_categories(conn: &mut SqliteConnection, kind: CategoryKind) -> Result<Vec<Category>> {
    let rows = match kind {
        CategoryKind::Organization => {
            use schema::organization_categories::dsl;
            dsl::organization_categories
                .order_by(dsl::name.asc())
                .load::<models::CategoryEntity>(conn)
        }
        CategoryKind::Event => {
            use schema::event_categories::dsl;
            dsl::event_categories
                .order_by(dsl::name.asc())
                .load::<models::CategoryEntity>(conn)
        }
    }
    .map_err(from_diesel_err)?;
    Ok(rows.into_iter().map(into_category).collect())
}

fn get_categories_by_names(
    conn: &mut SqliteConnection,
    kind: CategoryKind,
    names: &[String],
) -> Result<Vec<Category>> {
    let rows = match kind {
        CategoryKind::Organization => {
            use schema::organization_categories::dsl;
            dsl::organization_categories
                .filter(dsl::name.eq_any(names))
                .load::<models::CategoryEntity>(conn)
        }
        CategoryKind::Event => {
            use schema::event_categories::dsl;
            dsl::event_categories
                .filter(dsl::name.eq_any(names))
                .load::<models::CategoryEntity>(conn)
        }
    }
    .map_err(from_diesel_err)?;
    Ok(rows.into_iter().map(into_category).collect())
}

fn into_category(entity: models::CategoryEntity) -> Category {
    let models::CategoryEntity {
        id,
        name,
        description,
    } = entity;
    Category {
        id,
        name,
        description,
    }
}
