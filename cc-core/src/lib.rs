pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use cc_entities::{
        contact::*, geo::*, lookup::*, price::*, rating::*, shop::*, time::*, url::Url, user::*,
    };
}
