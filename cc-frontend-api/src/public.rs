use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use cc_boundary::{
    CoffeeShop, NewCoffeeShop, NewShopRating, PlaceDetails, PlaceSuggestion, Rating,
};

use crate::{into_json, Result};

/// Minimum number of characters before the search box
/// triggers a places lookup.
pub const MIN_QUERY_LEN: usize = 3;

#[must_use]
pub fn should_search(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Public coffee-shop directory API
#[derive(Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn coffee_shops(&self) -> Result<Vec<CoffeeShop>> {
        let url = format!("{}/coffee-shops", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn coffee_shop(&self, id: i64) -> Result<CoffeeShop> {
        let url = format!("{}/coffee-shops/{id}", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn create_coffee_shop(&self, new_shop: &NewCoffeeShop) -> Result<CoffeeShop> {
        let url = format!("{}/coffee-shops", self.url);
        let response = Request::post(&url).json(new_shop)?.send().await?;
        into_json(response).await
    }

    pub async fn ratings_of_shop(&self, shop_id: i64) -> Result<Vec<Rating>> {
        let url = format!("{}/coffee-shops/{shop_id}/ratings", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn create_rating(
        &self,
        shop_id: i64,
        new_rating: &NewShopRating,
    ) -> Result<Rating> {
        let url = format!("{}/coffee-shops/{shop_id}/ratings", self.url);
        let response = Request::post(&url).json(new_rating)?.send().await?;
        into_json(response).await
    }

    pub async fn search_places(&self, query: &str) -> Result<Vec<PlaceSuggestion>> {
        // Short queries do not trigger a request
        if !should_search(query) {
            return Ok(vec![]);
        }
        let encoded_query = utf8_percent_encode(query, NON_ALPHANUMERIC);
        let url = format!("{}/places/search?query={encoded_query}", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails> {
        let encoded_place_id = utf8_percent_encode(place_id, NON_ALPHANUMERIC);
        let url = format!("{}/places/details?place_id={encoded_place_id}", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_do_not_trigger_a_search() {
        assert!(!should_search(""));
        assert!(!should_search("st"));
        assert!(!should_search("  st  "));
        assert!(should_search("starbucks paris"));
        assert!(should_search("abc"));
    }
}
