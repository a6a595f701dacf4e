use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A shop as delivered by the REST API.
///
/// List fields are normalized to arrays and the price range to a pair;
/// timestamps travel as unix seconds.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct CoffeeShop {
    pub id              : i64,
    pub user_id         : i64,
    pub created_at      : i64,
    pub name            : String,
    pub address         : String,
    pub description     : String,
    pub image_url       : String,
    pub coffee_brands   : Vec<String>,
    pub machine_brands  : Vec<String>,
    pub coffee_styles   : Vec<String>,
    pub dietary_options : Vec<String>,
    pub seating_options : Vec<String>,
    pub noise_level     : Option<String>,
    pub price_range     : (u8, u8),
    pub open_now        : Option<bool>,
    pub is_independent  : Option<bool>,
    pub laptop_friendly : Option<bool>,
    pub coffee_quality  : Option<i8>,
    pub ambience        : Option<i8>,
    pub service         : Option<i8>,
    pub workability     : Option<i8>,
    pub menu_variety    : Option<i8>,
    pub price_value     : Option<i8>,
    pub latitude        : Option<f64>,
    pub longitude       : Option<f64>,
    pub website         : Option<String>,
    pub phone           : Option<String>,
    pub maps_url        : Option<String>,
    pub opening_hours   : Option<String>,
}

/// Shop creation payload; list fields are JSON-encoded strings
/// as submitted by the map client's form.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewCoffeeShop {
    // Missing mandatory fields surface as field-level validation
    // errors instead of rejecting the whole document
    #[serde(default)]
    pub name            : String,
    #[serde(default)]
    pub address         : String,
    #[serde(default)]
    pub description     : String,
    #[serde(default)]
    pub image_url       : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coffee_brands   : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_brands  : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coffee_styles   : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_options : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seating_options : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_level     : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range     : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_now        : Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_independent  : Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub laptop_friendly : Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coffee_quality  : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambience        : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service         : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workability     : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_variety    : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_value     : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude        : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude       : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website         : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone           : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps_url        : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours   : Option<String>,
}

/// A rating as delivered by the REST API.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id         : i64,
    pub shop_id    : i64,
    pub user_id    : i64,
    pub created_at : i64,
    pub rating     : i8,
    pub review     : Option<String>,
    pub visited    : bool,
    pub want_to_go : bool,
}

/// Rating creation payload.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewShopRating {
    pub rating     : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review     : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited    : Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub want_to_go : Option<bool>,
}

/// One autocomplete suggestion from the places provider.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct PlaceSuggestion {
    pub description    : String,
    pub place_id       : String,
    pub main_text      : String,
    pub secondary_text : String,
}

/// Details of a single place as delivered by the places proxy.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    pub name          : Option<String>,
    pub address       : Option<String>,
    pub latitude      : Option<f64>,
    pub longitude     : Option<f64>,
    pub phone         : Option<String>,
    pub website       : Option<String>,
    pub maps_url      : Option<String>,
    pub opening_hours : Vec<String>,
    pub rating        : Option<f64>,
    pub price_level   : Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url     : Option<String>,
}

/// A complaint about a single field of a rejected payload.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Error response body of the REST API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, thiserror::Error),
    error("{message} (HTTP {http_status})")
)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
