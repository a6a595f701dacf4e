use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _new_user: &NewUser) -> Result<User> {
        unreachable!();
    }

    fn try_get_user(&self, id: i64) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }

    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, new_user: &NewUser) -> Result<User> {
        create_user(&mut self.conn.borrow_mut(), new_user)
    }

    fn try_get_user(&self, id: i64) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }

    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, new_user: &NewUser) -> Result<User> {
        create_user(&mut self.conn.borrow_mut(), new_user)
    }

    fn try_get_user(&self, id: i64) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }

    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

fn create_user(conn: &mut SqliteConnection, new_user: &NewUser) -> Result<User> {
    let created_at = Timestamp::now();
    let entity = models::NewUserEntity::new(new_user, created_at);
    diesel::insert_into(schema::users::table)
        .values(&entity)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    try_get_user(conn, id)?.ok_or(repo::Error::NotFound)
}

fn try_get_user(conn: &mut SqliteConnection, id: i64) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn try_get_user_by_username(conn: &mut SqliteConnection, username: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::username.eq(username))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
