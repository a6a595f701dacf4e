use std::collections::HashMap;

use super::*;

impl<'a> ShopRepo for DbReadOnly<'a> {
    fn create_shop(&self, _details: ShopDetails, _user_id: i64) -> Result<CoffeeShop> {
        unreachable!();
    }

    fn get_shop(&self, id: i64) -> Result<CoffeeShop> {
        get_shop(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_shop(&self, id: i64) -> Result<Option<CoffeeShop>> {
        try_get_shop(&mut self.conn.borrow_mut(), id)
    }

    fn all_shops(&self) -> Result<Vec<CoffeeShop>> {
        all_shops(&mut self.conn.borrow_mut())
    }
    fn count_shops(&self) -> Result<usize> {
        count_shops(&mut self.conn.borrow_mut())
    }
}

impl<'a> ShopRepo for DbReadWrite<'a> {
    fn create_shop(&self, details: ShopDetails, user_id: i64) -> Result<CoffeeShop> {
        create_shop(&mut self.conn.borrow_mut(), details, user_id)
    }

    fn get_shop(&self, id: i64) -> Result<CoffeeShop> {
        get_shop(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_shop(&self, id: i64) -> Result<Option<CoffeeShop>> {
        try_get_shop(&mut self.conn.borrow_mut(), id)
    }

    fn all_shops(&self) -> Result<Vec<CoffeeShop>> {
        all_shops(&mut self.conn.borrow_mut())
    }
    fn count_shops(&self) -> Result<usize> {
        count_shops(&mut self.conn.borrow_mut())
    }
}

impl<'a> ShopRepo for DbConnection<'a> {
    fn create_shop(&self, details: ShopDetails, user_id: i64) -> Result<CoffeeShop> {
        create_shop(&mut self.conn.borrow_mut(), details, user_id)
    }

    fn get_shop(&self, id: i64) -> Result<CoffeeShop> {
        get_shop(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_shop(&self, id: i64) -> Result<Option<CoffeeShop>> {
        try_get_shop(&mut self.conn.borrow_mut(), id)
    }

    fn all_shops(&self) -> Result<Vec<CoffeeShop>> {
        all_shops(&mut self.conn.borrow_mut())
    }
    fn count_shops(&self) -> Result<usize> {
        count_shops(&mut self.conn.borrow_mut())
    }
}

fn create_shop(
    conn: &mut SqliteConnection,
    details: ShopDetails,
    user_id: i64,
) -> Result<CoffeeShop> {
    let created_at = Timestamp::now();
    let new_shop = models::NewShopEntity::new(&details, user_id, created_at);
    diesel::insert_into(schema::coffee_shops::table)
        .values(&new_shop)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    let new_attributes: Vec<_> = details
        .attributes
        .iter()
        .map(|(kind, value)| models::NewShopAttribute {
            shop_id: id,
            kind: kind as i16,
            value,
        })
        .collect();
    if !new_attributes.is_empty() {
        diesel::insert_into(schema::shop_attribute::table)
            .values(&new_attributes)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    get_shop(conn, id)
}

fn get_shop(conn: &mut SqliteConnection, id: i64) -> Result<CoffeeShop> {
    try_get_shop(conn, id)?.ok_or(repo::Error::NotFound)
}

fn try_get_shop(conn: &mut SqliteConnection, id: i64) -> Result<Option<CoffeeShop>> {
    use schema::coffee_shops::dsl;
    let entity = dsl::coffee_shops
        .filter(dsl::id.eq(id))
        .first::<models::ShopEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?;
    let Some(entity) = entity else {
        return Ok(None);
    };
    let attributes = load_attributes_of_shop(conn, id)?;
    Ok(Some(util::load_shop(entity, attributes)?))
}

fn load_attributes_of_shop(conn: &mut SqliteConnection, shop_id: i64) -> Result<ShopAttributes> {
    use schema::shop_attribute::dsl;
    let rows = dsl::shop_attribute
        .filter(dsl::shop_id.eq(shop_id))
        // preserve insertion order
        .order_by(dsl::rowid)
        .load::<models::ShopAttributeEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut attributes = ShopAttributes::default();
    for row in rows {
        if let Some(kind) = util::load_attribute_kind(row.kind) {
            attributes.push(kind, row.value);
        }
    }
    Ok(attributes)
}

fn all_shops(conn: &mut SqliteConnection) -> Result<Vec<CoffeeShop>> {
    let entities = schema::coffee_shops::table
        .order_by(schema::coffee_shops::dsl::id)
        .load::<models::ShopEntity>(conn)
        .map_err(from_diesel_err)?;
    let attribute_rows = schema::shop_attribute::table
        .order_by(schema::shop_attribute::dsl::rowid)
        .load::<models::ShopAttributeEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut attributes_by_shop: HashMap<i64, ShopAttributes> = HashMap::new();
    for row in attribute_rows {
        if let Some(kind) = util::load_attribute_kind(row.kind) {
            attributes_by_shop
                .entry(row.shop_id)
                .or_default()
                .push(kind, row.value);
        }
    }
    entities
        .into_iter()
        .map(|entity| {
            let attributes = attributes_by_shop.remove(&entity.id).unwrap_or_default();
            util::load_shop(entity, attributes)
        })
        .collect()
}

fn count_shops(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::coffee_shops::dsl;
    Ok(dsl::coffee_shops
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
