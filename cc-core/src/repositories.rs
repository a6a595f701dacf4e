// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ShopRepo {
    // Returns the persisted row including the generated id and timestamp.
    fn create_shop(&self, details: ShopDetails, user_id: i64) -> Result<CoffeeShop>;

    fn get_shop(&self, id: i64) -> Result<CoffeeShop>;
    fn try_get_shop(&self, id: i64) -> Result<Option<CoffeeShop>>;

    fn all_shops(&self) -> Result<Vec<CoffeeShop>>;
    fn count_shops(&self) -> Result<usize>;
}

pub trait RatingRepo {
    fn create_rating(&self, shop_id: i64, user_id: i64, details: RatingDetails) -> Result<Rating>;

    fn ratings_of_shop(&self, shop_id: i64) -> Result<Vec<Rating>>;
}

pub trait UserRepo {
    fn create_user(&self, new_user: &NewUser) -> Result<User>;

    fn try_get_user(&self, id: i64) -> Result<Option<User>>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    fn count_users(&self) -> Result<usize>;
}
