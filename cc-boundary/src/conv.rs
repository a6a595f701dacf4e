use cc_entities as e;

use super::*;

impl From<e::shop::CoffeeShop> for CoffeeShop {
    fn from(from: e::shop::CoffeeShop) -> Self {
        let e::shop::CoffeeShop {
            id,
            user_id,
            created_at,
            name,
            address,
            description,
            image_url,
            attributes,
            noise_level,
            price_range,
            open_now,
            is_independent,
            laptop_friendly,
            scores,
            location,
            contact,
            opening_hours,
        } = from;
        let e::shop::ShopAttributes {
            coffee_brands,
            machine_brands,
            coffee_styles,
            dietary_options,
            seating_options,
        } = attributes;
        let e::shop::QualityScores {
            coffee_quality,
            ambience,
            service,
            workability,
            menu_variety,
            price_value,
        } = scores;
        let contact = contact.unwrap_or_default();
        Self {
            id,
            user_id,
            created_at: created_at.as_secs(),
            name,
            address,
            description,
            image_url: image_url.to_string(),
            coffee_brands,
            machine_brands,
            coffee_styles,
            dietary_options,
            seating_options,
            noise_level,
            price_range: (price_range.min(), price_range.max()),
            open_now,
            is_independent,
            laptop_friendly,
            coffee_quality: coffee_quality.map(Into::into),
            ambience: ambience.map(Into::into),
            service: service.map(Into::into),
            workability: workability.map(Into::into),
            menu_variety: menu_variety.map(Into::into),
            price_value: price_value.map(Into::into),
            latitude: location.map(e::geo::MapPoint::lat_deg),
            longitude: location.map(e::geo::MapPoint::lng_deg),
            website: contact.website.map(|url| url.to_string()),
            phone: contact.phone,
            maps_url: contact.maps_url.map(|url| url.to_string()),
            opening_hours: opening_hours.map(Into::into),
        }
    }
}

impl From<e::rating::Rating> for Rating {
    fn from(from: e::rating::Rating) -> Self {
        let e::rating::Rating {
            id,
            shop_id,
            user_id,
            created_at,
            value,
            review,
            visited,
            want_to_go,
        } = from;
        Self {
            id,
            shop_id,
            user_id,
            created_at: created_at.as_secs(),
            rating: value.into(),
            review,
            visited,
            want_to_go,
        }
    }
}

impl From<e::lookup::PlaceSuggestion> for PlaceSuggestion {
    fn from(from: e::lookup::PlaceSuggestion) -> Self {
        let e::lookup::PlaceSuggestion {
            description,
            place_id,
            main_text,
            secondary_text,
        } = from;
        Self {
            description,
            place_id,
            main_text,
            secondary_text,
        }
    }
}

impl From<e::lookup::PlaceDetails> for PlaceDetails {
    fn from(from: e::lookup::PlaceDetails) -> Self {
        let e::lookup::PlaceDetails {
            name,
            address,
            location,
            phone,
            website,
            maps_url,
            opening_hours,
            rating,
            price_level,
            photo_url,
        } = from;
        Self {
            name,
            address,
            latitude: location.map(e::geo::MapPoint::lat_deg),
            longitude: location.map(e::geo::MapPoint::lng_deg),
            phone,
            website,
            maps_url,
            opening_hours,
            rating,
            price_level,
            photo_url,
        }
    }
}
