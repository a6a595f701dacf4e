use crate::geo::MapPoint;

/// One autocomplete suggestion from the places provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceSuggestion {
    pub description: String,
    pub place_id: String,
    pub main_text: String,
    pub secondary_text: String,
}

/// Extended details of a single place as reported by the places provider.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlaceDetails {
    pub name          : Option<String>,
    pub address       : Option<String>,
    pub location      : Option<MapPoint>,
    pub phone         : Option<String>,
    pub website       : Option<String>,
    pub maps_url      : Option<String>,
    pub opening_hours : Vec<String>,
    pub rating        : Option<f64>,
    pub price_level   : Option<i32>,
    pub photo_url     : Option<String>,
}
