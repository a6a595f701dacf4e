use super::*;

pub fn create_rating(
    connections: &sqlite::Connections,
    shop_id: i64,
    new_rating: usecases::NewShopRating,
    user_id: i64,
) -> Result<Rating> {
    let details = usecases::parse_new_rating(new_rating)?;
    let rating = {
        let mut connection = connections.exclusive()?;
        connection.transaction(|conn| usecases::store_new_rating(conn, shop_id, user_id, details))
    }?;
    info!("Created rating {} for shop {}", rating.id, rating.shop_id);
    Ok(rating)
}
