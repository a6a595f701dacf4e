use thiserror::Error;

use crate::entities::{PlaceDetails, PlaceSuggestion};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The places provider credential is not configured")]
    NotConfigured,
    #[error("The places provider rejected the request: {status}")]
    Upstream {
        status: String,
        message: Option<String>,
    },
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Read-only lookup against the external places provider.
///
/// A single round trip per call: no caching, no rate limiting, no retries.
pub trait PlacesGateway {
    fn search_places(&self, query: &str) -> Result<Vec<PlaceSuggestion>>;
    fn place_details(&self, place_id: &str) -> Result<PlaceDetails>;
}
