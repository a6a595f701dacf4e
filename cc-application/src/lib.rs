#[macro_use]
extern crate log;

mod create_rating;
mod create_shop;
mod guest;

pub mod prelude {
    pub use super::{create_rating::*, create_shop::*, guest::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use cc_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use cc_db_sqlite::Connections;
}
