use anyhow::anyhow;
use cc_core::{entities::*, repositories::Error};
use num_traits::FromPrimitive as _;

use super::models;

type Result<T> = std::result::Result<T, Error>;

pub fn load_url(url: String) -> Result<Url> {
    url.parse()
        .map_err(|err| Error::Other(anyhow!("Invalid URL '{url}' in database: {err}")))
}

fn load_score(value: i16) -> Result<ScoreValue> {
    ScoreValue::try_from(i64::from(value))
        .map_err(|_| Error::Other(anyhow!("Invalid score value {value} in database")))
}

fn load_optional_score(value: Option<i16>) -> Result<Option<ScoreValue>> {
    value.map(load_score).transpose()
}

pub fn load_attribute_kind(kind: i16) -> Option<AttributeKind> {
    let parsed = AttributeKind::from_i16(kind);
    if parsed.is_none() {
        log::warn!("Skipping shop attribute of unknown kind {kind}");
    }
    parsed
}

pub fn load_rating(entity: models::RatingEntity) -> Result<Rating> {
    let models::RatingEntity {
        id,
        shop_id,
        user_id,
        created_at,
        rating,
        review,
        visited,
        want_to_go,
    } = entity;
    Ok(Rating {
        id,
        shop_id,
        user_id,
        created_at: Timestamp::from_secs(created_at),
        value: load_score(rating)?,
        review,
        visited,
        want_to_go,
    })
}

pub fn load_shop(entity: models::ShopEntity, attributes: ShopAttributes) -> Result<CoffeeShop> {
    let models::ShopEntity {
        id,
        user_id,
        created_at,
        name,
        address,
        description,
        image_url,
        noise_level,
        price_min,
        price_max,
        open_now,
        is_independent,
        laptop_friendly,
        coffee_quality,
        ambience,
        service,
        workability,
        menu_variety,
        price_value,
        lat,
        lng,
        website,
        phone,
        maps_url,
        opening_hours,
    } = entity;

    let price_range = PriceRange::try_new(i64::from(price_min), i64::from(price_max))
        .map_err(|_| Error::Other(anyhow!("Invalid price range in database")))?;

    let scores = QualityScores {
        coffee_quality: load_optional_score(coffee_quality)?,
        ambience: load_optional_score(ambience)?,
        service: load_optional_score(service)?,
        workability: load_optional_score(workability)?,
        menu_variety: load_optional_score(menu_variety)?,
        price_value: load_optional_score(price_value)?,
    };

    let location = match (lat, lng) {
        (Some(lat), Some(lng)) => {
            let pos = MapPoint::try_from_lat_lng_deg(lat, lng);
            if pos.is_none() {
                log::warn!("Ignoring invalid position ({lat},{lng}) of shop {id}");
            }
            pos
        }
        (None, None) => None,
        _ => {
            log::warn!("Ignoring incomplete position of shop {id}");
            None
        }
    };

    let contact = Contact {
        website: website.map(load_url).transpose()?,
        phone,
        maps_url: maps_url.map(load_url).transpose()?,
    };
    let contact = (!contact.is_empty()).then_some(contact);

    let opening_hours = opening_hours
        .map(|s| {
            s.parse::<OpeningHours>()
                .map_err(|_| Error::Other(anyhow!("Invalid opening hours in database")))
        })
        .transpose()?;

    let record = ShopRecord {
        id,
        user_id,
        created_at: Timestamp::from_secs(created_at),
    };
    let details = ShopDetails {
        name,
        address,
        description,
        image_url: load_url(image_url)?,
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
    };
    Ok((record, details).into())
}
