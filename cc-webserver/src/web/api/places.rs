use anyhow::anyhow;

use super::*;

#[get("/places/search?<query>")]
pub fn search_places(
    places: &State<Places>,
    query: Option<&str>,
) -> Result<Vec<json::PlaceSuggestion>> {
    let query = required_param("query", query)?;
    let suggestions = places.search_places(query)?;
    Ok(Json(suggestions.into_iter().map(Into::into).collect()))
}

#[get("/places/details?<place_id>")]
pub fn place_details(places: &State<Places>, place_id: Option<&str>) -> Result<json::PlaceDetails> {
    let place_id = required_param("place_id", place_id)?;
    let details = places.place_details(place_id)?;
    Ok(Json(details.into()))
}

fn required_param<'a>(
    name: &'static str,
    value: Option<&'a str>,
) -> std::result::Result<&'a str, ApiError> {
    value.map(str::trim).filter(|v| !v.is_empty()).ok_or_else(|| {
        ApiError::OtherWithStatus(anyhow!("{name} parameter is required"), Status::BadRequest)
    })
}
