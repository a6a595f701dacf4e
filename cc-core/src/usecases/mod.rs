mod error;
mod new_rating;
mod new_shop;

pub use self::{error::Error, new_rating::*, new_shop::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

pub fn all_shops<R: ShopRepo>(repo: &R) -> Result<Vec<CoffeeShop>> {
    Ok(repo.all_shops()?)
}

pub fn get_shop<R: ShopRepo>(repo: &R, id: i64) -> Result<CoffeeShop> {
    Ok(repo.get_shop(id)?)
}

pub fn ratings_of_shop<R: RatingRepo>(repo: &R, shop_id: i64) -> Result<Vec<Rating>> {
    Ok(repo.ratings_of_shop(shop_id)?)
}

pub fn store_new_shop<R: ShopRepo>(
    repo: &R,
    details: ShopDetails,
    user_id: i64,
) -> Result<CoffeeShop> {
    log::debug!("Storing new shop \"{}\" for user {user_id}", details.name);
    Ok(repo.create_shop(details, user_id)?)
}

pub fn store_new_rating<R>(
    repo: &R,
    shop_id: i64,
    user_id: i64,
    details: RatingDetails,
) -> Result<Rating>
where
    R: ShopRepo + RatingRepo,
{
    // The shop must exist; a dangling foreign key would otherwise
    // only surface as a constraint violation.
    repo.get_shop(shop_id)?;
    Ok(repo.create_rating(shop_id, user_id, details)?)
}
