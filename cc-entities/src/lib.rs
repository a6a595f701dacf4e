#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # cc-entities
//!
//! Reusable, agnostic domain entities for the coffee-shop directory.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod contact;
pub mod geo;
pub mod lookup;
pub mod price;
pub mod rating;
pub mod shop;
pub mod time;
pub mod user;
pub mod url {
    pub use url::{ParseError, Url};
}
