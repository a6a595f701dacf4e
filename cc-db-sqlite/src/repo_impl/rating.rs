use super::*;

impl<'a> RatingRepo for DbReadOnly<'a> {
    fn create_rating(
        &self,
        _shop_id: i64,
        _user_id: i64,
        _details: RatingDetails,
    ) -> Result<Rating> {
        unreachable!();
    }

    fn ratings_of_shop(&self, shop_id: i64) -> Result<Vec<Rating>> {
        ratings_of_shop(&mut self.conn.borrow_mut(), shop_id)
    }
}

impl<'a> RatingRepo for DbReadWrite<'a> {
    fn create_rating(&self, shop_id: i64, user_id: i64, details: RatingDetails) -> Result<Rating> {
        create_rating(&mut self.conn.borrow_mut(), shop_id, user_id, details)
    }

    fn ratings_of_shop(&self, shop_id: i64) -> Result<Vec<Rating>> {
        ratings_of_shop(&mut self.conn.borrow_mut(), shop_id)
    }
}

impl<'a> RatingRepo for DbConnection<'a> {
    fn create_rating(&self, shop_id: i64, user_id: i64, details: RatingDetails) -> Result<Rating> {
        create_rating(&mut self.conn.borrow_mut(), shop_id, user_id, details)
    }

    fn ratings_of_shop(&self, shop_id: i64) -> Result<Vec<Rating>> {
        ratings_of_shop(&mut self.conn.borrow_mut(), shop_id)
    }
}

fn create_rating(
    conn: &mut SqliteConnection,
    shop_id: i64,
    user_id: i64,
    details: RatingDetails,
) -> Result<Rating> {
    let created_at = Timestamp::now();
    let new_rating = models::NewRatingEntity::new(&details, shop_id, user_id, created_at);
    diesel::insert_into(schema::ratings::table)
        .values(&new_rating)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    load_rating(conn, id)
}

fn load_rating(conn: &mut SqliteConnection, id: i64) -> Result<Rating> {
    use schema::ratings::dsl;
    let entity = dsl::ratings
        .filter(dsl::id.eq(id))
        .first::<models::RatingEntity>(conn)
        .map_err(from_diesel_err)?;
    util::load_rating(entity)
}

fn ratings_of_shop(conn: &mut SqliteConnection, shop_id: i64) -> Result<Vec<Rating>> {
    use schema::ratings::dsl;
    dsl::ratings
        .filter(dsl::shop_id.eq(shop_id))
        .order_by(dsl::id)
        .load::<models::RatingEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(util::load_rating)
        .collect()
}
