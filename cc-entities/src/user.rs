use crate::time::Timestamp;

/// A registered account.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : i64,
    pub username   : String,
    pub password   : String,
    pub name       : Option<String>,
    pub email      : Option<String>,
    pub avatar_url : Option<String>,
    pub created_at : Timestamp,
}

/// Content part of a user, i.e. everything the database does not generate.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username   : String,
    pub password   : String,
    pub name       : Option<String>,
    pub email      : Option<String>,
    pub avatar_url : Option<String>,
}
