use thiserror::Error;

use crate::entities::{PriceRange, ScoreValue, Url};

/// A single field-level complaint about an untrusted payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

type Result<T> = std::result::Result<T, FieldError>;

pub fn string_len(field: &'static str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(FieldError::new(
            field,
            format!("Must be between {min} and {max} characters"),
        ));
    }
    Ok(())
}

pub fn url(field: &'static str, value: &str) -> Result<Url> {
    value
        .parse()
        .map_err(|_| FieldError::new(field, "Invalid URL"))
}

pub fn optional_url(field: &'static str, value: Option<&str>) -> Result<Option<Url>> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| url(field, v))
        .transpose()
}

// List fields arrive as JSON-encoded strings; a missing or
// empty value counts as an empty list.
pub fn json_string_list(field: &'static str, value: Option<&str>) -> Result<Vec<String>> {
    let Some(encoded) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(Vec::new());
    };
    serde_json::from_str(encoded)
        .map_err(|_| FieldError::new(field, "Must be a JSON array of strings"))
}

// The price range arrives as a JSON-encoded pair; a missing or
// empty value counts as the full bracket.
pub fn json_price_range(field: &'static str, value: Option<&str>) -> Result<PriceRange> {
    let Some(encoded) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(PriceRange::default());
    };
    let (min, max): (i64, i64) = serde_json::from_str(encoded)
        .map_err(|_| FieldError::new(field, "Must be a JSON pair of integers"))?;
    PriceRange::try_new(min, max).map_err(|_| {
        FieldError::new(
            field,
            format!(
                "Must be within {} and {}",
                PriceRange::min_value(),
                PriceRange::max_value()
            ),
        )
    })
}

pub fn score(field: &'static str, value: Option<i64>) -> Result<Option<ScoreValue>> {
    value
        .map(|v| {
            ScoreValue::try_from(v).map_err(|_| {
                FieldError::new(
                    field,
                    format!(
                        "Must be between {} and {}",
                        i64::from(ScoreValue::min()),
                        i64::from(ScoreValue::max())
                    ),
                )
            })
        })
        .transpose()
}

// Opening hours stay an opaque JSON document; it only has to parse.
pub fn json_document(field: &'static str, value: &str) -> Result<()> {
    serde_json::from_str::<serde_json::Value>(value)
        .map(|_| ())
        .map_err(|_| FieldError::new(field, "Must be a JSON document"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_len_bounds() {
        assert!(string_len("name", "ab", 3, 100).is_err());
        assert!(string_len("name", "abc", 3, 100).is_ok());
        assert!(string_len("name", &"x".repeat(101), 3, 100).is_err());
    }

    #[test]
    fn json_string_list_accepts_missing_and_empty() {
        assert_eq!(json_string_list("coffeeBrands", None).unwrap(), Vec::<String>::new());
        assert_eq!(json_string_list("coffeeBrands", Some("")).unwrap(), Vec::<String>::new());
        assert_eq!(
            json_string_list("coffeeBrands", Some(r#"["a","b"]"#)).unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
        assert!(json_string_list("coffeeBrands", Some("not json")).is_err());
        assert!(json_string_list("coffeeBrands", Some(r#"{"a":1}"#)).is_err());
    }

    #[test]
    fn json_price_range_defaults_to_full_bracket() {
        let range = json_price_range("priceRange", None).unwrap();
        assert_eq!((range.min(), range.max()), (1, 5));
        let range = json_price_range("priceRange", Some("[2,3]")).unwrap();
        assert_eq!((range.min(), range.max()), (2, 3));
        assert!(json_price_range("priceRange", Some("[0,3]")).is_err());
        assert!(json_price_range("priceRange", Some("nope")).is_err());
    }

    #[test]
    fn score_bounds() {
        assert!(score("ambience", Some(0)).is_err());
        assert!(score("ambience", Some(6)).is_err());
        assert_eq!(score("ambience", None).unwrap(), None);
        assert_eq!(
            score("ambience", Some(4)).unwrap(),
            Some(ScoreValue::try_from(4).unwrap())
        );
    }
}
