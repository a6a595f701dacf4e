use super::*;

pub fn create_shop(
    connections: &sqlite::Connections,
    new_shop: usecases::NewCoffeeShop,
    user_id: i64,
) -> Result<CoffeeShop> {
    // Validation is pure and does not need the transaction
    let details = usecases::parse_new_shop(new_shop)?;
    let shop = {
        let mut connection = connections.exclusive()?;
        connection.transaction(|conn| usecases::store_new_shop(conn, details, user_id))
    }?;
    info!("Created shop {} (\"{}\")", shop.id, shop.name);
    Ok(shop)
}
