use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
    sqlite::SqliteConnection,
};

use cc_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{models, schema, util, DbConnection, DbReadOnly, DbReadWrite};

mod rating;
mod shop;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

define_sql_function! {
    // SQLite rowid of the most recent successful INSERT on this connection
    fn last_insert_rowid() -> BigInt;
}
