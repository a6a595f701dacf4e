use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use cc_core::{
    entities::*,
    gateways::places::{self, PlacesGateway},
};

use super::{sqlite, Cfg};

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{setup, setup_with_cfg, DummyPlacesGW};

    pub use cc_core::repositories::*;
}

pub fn setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, sqlite::Connections) {
    setup_with_cfg(mounts, Cfg::default())
}

pub fn setup_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
) -> (Client, sqlite::Connections) {
    let connections = cc_db_sqlite::Connections::init(":memory:", 1).unwrap();
    cc_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    let db = sqlite::Connections::from(connections);

    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg,
    };
    let gateways = super::Gateways {
        places: Box::new(DummyPlacesGW),
    };
    let rocket = super::rocket_instance(options, db.clone(), gateways);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

// Stands in for the external places provider in tests.
pub struct DummyPlacesGW;

impl PlacesGateway for DummyPlacesGW {
    fn search_places(&self, query: &str) -> Result<Vec<PlaceSuggestion>, places::Error> {
        Ok(vec![PlaceSuggestion {
            description: format!("{query}, Somewhere"),
            place_id: "dummy-1".into(),
            main_text: query.to_string(),
            secondary_text: "Somewhere".into(),
        }])
    }

    fn place_details(&self, place_id: &str) -> Result<PlaceDetails, places::Error> {
        Ok(PlaceDetails {
            name: Some(place_id.to_string()),
            ..Default::default()
        })
    }
}
