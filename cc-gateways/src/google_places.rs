use anyhow::anyhow;
use serde::Deserialize;

use cc_core::{
    entities::{MapPoint, PlaceDetails, PlaceSuggestion},
    gateways::places::{Error, PlacesGateway},
};

const AUTOCOMPLETE_URL: &str = "https://maps.googleapis.com/maps/api/place/autocomplete/json";
const DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";
const PHOTO_URL: &str = "https://maps.googleapis.com/maps/api/place/photo";

const DETAILS_FIELDS: &str = "name,formatted_address,geometry,opening_hours,\
formatted_phone_number,website,url,photos,rating,price_level,international_phone_number";

const PROVIDER_STATUS_OK: &str = "OK";
const PHOTO_MAX_WIDTH: u32 = 800;

type Result<T> = std::result::Result<T, Error>;

/// Places lookup backed by the Google Places web service.
pub struct GooglePlaces {
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl GooglePlaces {
    pub fn new(api_key: Option<String>) -> Self {
        if api_key.is_none() {
            log::warn!("No Google Maps API key found");
        }
        Self {
            api_key,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(Error::NotConfigured)
    }

    fn get_json<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|err| Error::Transport(anyhow!(err)))?;
        if !response.status().is_success() {
            return Err(Error::Transport(anyhow!(
                "Places provider responded with HTTP status {}",
                response.status()
            )));
        }
        response.json().map_err(|err| Error::Transport(anyhow!(err)))
    }
}

impl PlacesGateway for GooglePlaces {
    fn search_places(&self, query: &str) -> Result<Vec<PlaceSuggestion>> {
        let api_key = self.api_key()?;
        let response: AutocompleteResponse = self.get_json(
            AUTOCOMPLETE_URL,
            &[
                ("input", query),
                ("types", "establishment"),
                ("keyword", "cafe"),
                ("key", api_key),
            ],
        )?;
        check_provider_status(response.status, response.error_message)?;
        Ok(response
            .predictions
            .into_iter()
            .map(suggestion_from_prediction)
            .collect())
    }

    fn place_details(&self, place_id: &str) -> Result<PlaceDetails> {
        let api_key = self.api_key()?;
        let response: DetailsResponse = self.get_json(
            DETAILS_URL,
            &[
                ("place_id", place_id),
                ("fields", DETAILS_FIELDS),
                ("key", api_key),
            ],
        )?;
        check_provider_status(response.status, response.error_message)?;
        Ok(details_from_result(
            response.result.unwrap_or_default(),
            api_key,
        ))
    }
}

fn check_provider_status(status: String, message: Option<String>) -> Result<()> {
    if status == PROVIDER_STATUS_OK {
        return Ok(());
    }
    log::warn!("Places provider error: {status} ({message:?})");
    Err(Error::Upstream { status, message })
}

fn suggestion_from_prediction(prediction: Prediction) -> PlaceSuggestion {
    let Prediction {
        description,
        place_id,
        structured_formatting,
    } = prediction;
    let StructuredFormatting {
        main_text,
        secondary_text,
    } = structured_formatting.unwrap_or_default();
    PlaceSuggestion {
        main_text: main_text.unwrap_or_else(|| description.clone()),
        secondary_text: secondary_text.unwrap_or_default(),
        description,
        place_id,
    }
}

fn details_from_result(result: PlaceResult, api_key: &str) -> PlaceDetails {
    let PlaceResult {
        name,
        formatted_address,
        geometry,
        formatted_phone_number,
        international_phone_number,
        website,
        url,
        opening_hours,
        photos,
        rating,
        price_level,
    } = result;
    let photo_url = photos.first().map(|photo| {
        format!(
            "{PHOTO_URL}?maxwidth={PHOTO_MAX_WIDTH}&photoreference={}&key={api_key}",
            photo.photo_reference
        )
    });
    PlaceDetails {
        name,
        address: formatted_address,
        location: geometry
            .and_then(|g| g.location)
            .and_then(|l| MapPoint::try_from_lat_lng_deg(l.lat, l.lng)),
        phone: formatted_phone_number.or(international_phone_number),
        website,
        maps_url: url,
        opening_hours: opening_hours.unwrap_or_default().weekday_text,
        rating,
        price_level,
        photo_url,
    }
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    status: String,
    #[serde(default)]
    predictions: Vec<Prediction>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    description: String,
    place_id: String,
    structured_formatting: Option<StructuredFormatting>,
}

#[derive(Debug, Default, Deserialize)]
struct StructuredFormatting {
    main_text: Option<String>,
    secondary_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    result: Option<PlaceResult>,
    error_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PlaceResult {
    name: Option<String>,
    formatted_address: Option<String>,
    geometry: Option<Geometry>,
    formatted_phone_number: Option<String>,
    international_phone_number: Option<String>,
    website: Option<String>,
    url: Option<String>,
    opening_hours: Option<OpeningHoursResult>,
    #[serde(default)]
    photos: Vec<Photo>,
    rating: Option<f64>,
    price_level: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Option<LatLng>,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OpeningHoursResult {
    #[serde(default)]
    weekday_text: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    photo_reference: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reshape_autocomplete_predictions() {
        let response: AutocompleteResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "predictions": [
                    {
                        "description": "Blue Cup, Market Street, Paris, France",
                        "place_id": "ChIJabc123",
                        "structured_formatting": {
                            "main_text": "Blue Cup",
                            "secondary_text": "Market Street, Paris, France"
                        }
                    },
                    {
                        "description": "Bare Prediction",
                        "place_id": "ChIJdef456"
                    }
                ]
            }"#,
        )
        .unwrap();
        assert!(check_provider_status(response.status, response.error_message).is_ok());
        let suggestions: Vec<_> = response
            .predictions
            .into_iter()
            .map(suggestion_from_prediction)
            .collect();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].place_id, "ChIJabc123");
        assert_eq!(suggestions[0].main_text, "Blue Cup");
        assert_eq!(suggestions[0].secondary_text, "Market Street, Paris, France");
        // Predictions without structured formatting fall back to the description
        assert_eq!(suggestions[1].main_text, "Bare Prediction");
        assert_eq!(suggestions[1].secondary_text, "");
    }

    #[test]
    fn non_ok_provider_status_is_an_upstream_error() {
        let err = check_provider_status("REQUEST_DENIED".into(), Some("bad key".into()))
            .err()
            .unwrap();
        match err {
            Error::Upstream { status, message } => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message.as_deref(), Some("bad key"));
            }
            _ => panic!("unexpected error"),
        }
    }

    #[test]
    fn reshape_place_details_with_photo() {
        let response: DetailsResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "result": {
                    "name": "Blue Cup",
                    "formatted_address": "12 Market St, Paris",
                    "geometry": { "location": { "lat": 48.8566, "lng": 2.3522 } },
                    "formatted_phone_number": "01 23 45 67 89",
                    "website": "https://bluecup.example",
                    "url": "https://maps.google.com/?cid=42",
                    "opening_hours": { "weekday_text": ["Monday: 8:00 AM - 6:00 PM"] },
                    "photos": [ { "photo_reference": "ref-1" }, { "photo_reference": "ref-2" } ],
                    "rating": 4.6,
                    "price_level": 2
                }
            }"#,
        )
        .unwrap();
        let details = details_from_result(response.result.unwrap(), "secret");
        assert_eq!(details.name.as_deref(), Some("Blue Cup"));
        assert_eq!(details.location.unwrap().lat_deg(), 48.8566);
        assert_eq!(details.opening_hours, vec!["Monday: 8:00 AM - 6:00 PM"]);
        assert_eq!(details.rating, Some(4.6));
        // The first photo reference becomes a photo URL pointing back at the provider
        assert_eq!(
            details.photo_url.as_deref(),
            Some(
                "https://maps.googleapis.com/maps/api/place/photo?maxwidth=800&photoreference=ref-1&key=secret"
            )
        );
    }

    #[test]
    fn details_without_photos_have_no_photo_url() {
        let details = details_from_result(PlaceResult::default(), "secret");
        assert_eq!(details.photo_url, None);
        assert!(details.opening_hours.is_empty());
    }
}
