use cc_gateways::GooglePlaces;

use crate::config::Config;

pub fn places_gateway(cfg: &Config) -> GooglePlaces {
    GooglePlaces::new(cfg.places.api_key.clone())
}
