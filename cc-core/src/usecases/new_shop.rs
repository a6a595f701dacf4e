use super::prelude::*;
use crate::util::validate::{self, FieldError};

/// Untrusted shop creation payload as submitted by clients.
///
/// The list fields and the price range arrive as JSON-encoded strings,
/// exactly as the map client submits them.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewCoffeeShop {
    pub name            : String,
    pub address         : String,
    pub description     : String,
    pub image_url       : String,
    pub coffee_brands   : Option<String>,
    pub machine_brands  : Option<String>,
    pub coffee_styles   : Option<String>,
    pub dietary_options : Option<String>,
    pub seating_options : Option<String>,
    pub noise_level     : Option<String>,
    pub price_range     : Option<String>,
    pub open_now        : Option<bool>,
    pub is_independent  : Option<bool>,
    pub laptop_friendly : Option<bool>,
    pub coffee_quality  : Option<i64>,
    pub ambience        : Option<i64>,
    pub service         : Option<i64>,
    pub workability     : Option<i64>,
    pub menu_variety    : Option<i64>,
    pub price_value     : Option<i64>,
    pub latitude        : Option<f64>,
    pub longitude       : Option<f64>,
    pub website         : Option<String>,
    pub phone           : Option<String>,
    pub maps_url        : Option<String>,
    pub opening_hours   : Option<String>,
}

/// Validates and transforms an untrusted payload into shop details.
///
/// Pure and free of side effects: repeated application to the same
/// payload yields the same result.
pub fn parse_new_shop(new: NewCoffeeShop) -> Result<ShopDetails> {
    let NewCoffeeShop {
        name,
        address,
        description,
        image_url,
        coffee_brands,
        machine_brands,
        coffee_styles,
        dietary_options,
        seating_options,
        noise_level,
        price_range,
        open_now,
        is_independent,
        laptop_friendly,
        coffee_quality,
        ambience,
        service,
        workability,
        menu_variety,
        price_value,
        latitude,
        longitude,
        website,
        phone,
        maps_url,
        opening_hours,
    } = new;

    let mut errors = Vec::new();

    check(&mut errors, validate::string_len("name", &name, 3, 100));
    check(&mut errors, validate::string_len("address", &address, 5, 200));
    check(
        &mut errors,
        validate::string_len("description", &description, 10, 1000),
    );

    let image_url = collect(&mut errors, validate::url("imageUrl", &image_url));

    let mut attributes = ShopAttributes::default();
    for (kind, field, encoded) in [
        (AttributeKind::CoffeeBrand, "coffeeBrands", &coffee_brands),
        (AttributeKind::MachineBrand, "machineBrands", &machine_brands),
        (AttributeKind::CoffeeStyle, "coffeeStyles", &coffee_styles),
        (
            AttributeKind::DietaryOption,
            "dietaryOptions",
            &dietary_options,
        ),
        (
            AttributeKind::SeatingOption,
            "seatingOptions",
            &seating_options,
        ),
    ] {
        if let Some(values) = collect(
            &mut errors,
            validate::json_string_list(field, encoded.as_deref()),
        ) {
            for value in values {
                attributes.push(kind, value);
            }
        }
    }

    let price_range = collect(
        &mut errors,
        validate::json_price_range("priceRange", price_range.as_deref()),
    );

    let scores = QualityScores {
        coffee_quality: collect(&mut errors, validate::score("coffeeQuality", coffee_quality))
            .flatten(),
        ambience: collect(&mut errors, validate::score("ambience", ambience)).flatten(),
        service: collect(&mut errors, validate::score("service", service)).flatten(),
        workability: collect(&mut errors, validate::score("workability", workability)).flatten(),
        menu_variety: collect(&mut errors, validate::score("menuVariety", menu_variety)).flatten(),
        price_value: collect(&mut errors, validate::score("priceValue", price_value)).flatten(),
    };

    let location = parse_location(&mut errors, latitude, longitude);

    let website = collect(
        &mut errors,
        validate::optional_url("website", website.as_deref()),
    )
    .flatten();
    let maps_url = collect(
        &mut errors,
        validate::optional_url("mapsUrl", maps_url.as_deref()),
    )
    .flatten();
    let phone = phone.filter(|p| !p.trim().is_empty());
    let contact = Contact {
        website,
        phone,
        maps_url,
    };
    let contact = (!contact.is_empty()).then_some(contact);

    let opening_hours = collect(
        &mut errors,
        parse_opening_hours(opening_hours.as_deref()),
    )
    .flatten();

    let noise_level = noise_level.filter(|l| !l.trim().is_empty());

    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    Ok(ShopDetails {
        name,
        address,
        description,
        // A parse failure has been recorded above
        image_url: image_url.expect("validated image URL"),
        attributes,
        noise_level,
        price_range: price_range.expect("validated price range"),
        open_now,
        is_independent,
        laptop_friendly,
        scores,
        location,
        contact,
        opening_hours,
    })
}

fn parse_location(
    errors: &mut Vec<FieldError>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Option<MapPoint> {
    let (lat, lng) = match (latitude, longitude) {
        (None, None) => return None,
        (Some(lat), Some(lng)) => (lat, lng),
        (Some(_), None) => {
            errors.push(FieldError::new(
                "longitude",
                "Latitude and longitude must be provided together",
            ));
            return None;
        }
        (None, Some(_)) => {
            errors.push(FieldError::new(
                "latitude",
                "Latitude and longitude must be provided together",
            ));
            return None;
        }
    };
    if !is_valid_lat_deg(lat) {
        errors.push(FieldError::new("latitude", "Must be between -90 and 90"));
    }
    if !is_valid_lng_deg(lng) {
        errors.push(FieldError::new("longitude", "Must be between -180 and 180"));
    }
    MapPoint::try_from_lat_lng_deg(lat, lng)
}

fn parse_opening_hours(
    encoded: Option<&str>,
) -> std::result::Result<Option<OpeningHours>, FieldError> {
    let Some(encoded) = encoded.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    validate::json_document("openingHours", encoded)?;
    encoded
        .parse()
        .map(Some)
        .map_err(|_| FieldError::new("openingHours", "Must be a JSON document"))
}

fn check(errors: &mut Vec<FieldError>, result: std::result::Result<(), FieldError>) {
    if let Err(err) = result {
        errors.push(err);
    }
}

fn collect<T>(
    errors: &mut Vec<FieldError>,
    result: std::result::Result<T, FieldError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> NewCoffeeShop {
        NewCoffeeShop {
            name: "Blue Cup".into(),
            address: "12 Market St".into(),
            description: "A cozy corner cafe".into(),
            image_url: "https://x/y.jpg".into(),
            ..Default::default()
        }
    }

    #[test]
    fn parse_minimal_payload() {
        let details = parse_new_shop(valid_payload()).unwrap();
        assert_eq!(details.name, "Blue Cup");
        assert!(details.attributes.is_empty());
        assert_eq!(details.price_range, PriceRange::default());
        assert_eq!(details.location, None);
        assert_eq!(details.contact, None);
        assert_eq!(details.opening_hours, None);
    }

    #[test]
    fn parse_is_idempotent_for_valid_payloads() {
        let payload = NewCoffeeShop {
            coffee_brands: Some(r#"["Roastery A","Roastery B"]"#.into()),
            coffee_styles: Some(r#"["Espresso"]"#.into()),
            price_range: Some("[2,3]".into()),
            ..valid_payload()
        };
        let first = parse_new_shop(payload.clone()).unwrap();
        let second = parse_new_shop(payload).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.attributes.coffee_brands,
            vec!["Roastery A".to_string(), "Roastery B".to_string()]
        );
        assert_eq!((first.price_range.min(), first.price_range.max()), (2, 3));
    }

    #[test]
    fn reject_short_name() {
        let payload = NewCoffeeShop {
            name: "ab".into(),
            ..valid_payload()
        };
        let Err(Error::Validation(errors)) = parse_new_shop(payload) else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn reject_invalid_image_url() {
        let payload = NewCoffeeShop {
            image_url: "not a url".into(),
            ..valid_payload()
        };
        assert!(matches!(
            parse_new_shop(payload),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn collect_multiple_field_errors() {
        let payload = NewCoffeeShop {
            name: "ab".into(),
            description: "too short".into(),
            coffee_brands: Some("not json".into()),
            ..valid_payload()
        };
        let Err(Error::Validation(errors)) = parse_new_shop(payload) else {
            panic!("expected validation failure");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "description", "coffeeBrands"]);
    }

    #[test]
    fn latitude_boundary() {
        let payload = NewCoffeeShop {
            latitude: Some(90.0),
            longitude: Some(0.0),
            ..valid_payload()
        };
        let details = parse_new_shop(payload).unwrap();
        assert_eq!(details.location.unwrap().lat_deg(), 90.0);

        let payload = NewCoffeeShop {
            latitude: Some(90.0001),
            longitude: Some(0.0),
            ..valid_payload()
        };
        let Err(Error::Validation(errors)) = parse_new_shop(payload) else {
            panic!("expected validation failure");
        };
        assert_eq!(errors[0].field, "latitude");
    }

    #[test]
    fn reject_lonely_coordinate() {
        let payload = NewCoffeeShop {
            latitude: Some(48.8566),
            ..valid_payload()
        };
        let Err(Error::Validation(errors)) = parse_new_shop(payload) else {
            panic!("expected validation failure");
        };
        assert_eq!(errors[0].field, "longitude");
    }

    #[test]
    fn opening_hours_must_be_json() {
        let payload = NewCoffeeShop {
            opening_hours: Some(r#"{"mon":"8-18"}"#.into()),
            ..valid_payload()
        };
        assert!(parse_new_shop(payload).is_ok());

        let payload = NewCoffeeShop {
            opening_hours: Some("mon 8-18".into()),
            ..valid_payload()
        };
        assert!(matches!(
            parse_new_shop(payload),
            Err(Error::Validation(_))
        ));
    }
}
