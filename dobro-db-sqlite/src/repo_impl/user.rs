use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: User) -> Result<User> {
        unreachable!();
    }
    fn get_user(&self, id: i64) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_login(&self, login: &str) -> Result<Option<User>> {
        try_get_user_by_login(&mut self.conn.borrow_mut(), login)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: User) -> Result<User> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn get_user(&self, id: i64) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_login(&self, login: &str) -> Result<Option<User>> {
        try_get_user_by_login(&mut self.conn.borrow_mut(), login)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: User) -> Result<User> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn get_user(&self, id: i64) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_login(&self, login: &str) -> Result<Option<User>> {
        try_get_user_by_login(&mut self.conn.borrow_mut(), login)
    }
}

fn create_user(conn: &mut SqliteConnection, user: User) -> Result<User> {
    let new_user = models::NewUser {
        full_name: &user.full_name,
        login: &user.login,
        password: user.password.as_hash(),
        role: user.role as i16,
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = assigned_row_id(conn)?;
    Ok(User { id, ..user })
}

fn get_user(conn: &mut SqliteConnection, id: i64) -> Result<User> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    load_user(entity)
}

fn try_get_user_by_login(conn: &mut SqliteConnection, login: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::login.eq(login))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user)
        .transpose()
}
