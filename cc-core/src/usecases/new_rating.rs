use super::prelude::*;
use crate::util::validate::{self, FieldError};

/// Untrusted rating payload as submitted by clients.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewShopRating {
    pub rating     : i64,
    pub review     : Option<String>,
    pub visited    : Option<bool>,
    pub want_to_go : Option<bool>,
}

pub fn parse_new_rating(new: NewShopRating) -> Result<RatingDetails> {
    let NewShopRating {
        rating,
        review,
        visited,
        want_to_go,
    } = new;

    let mut errors = Vec::new();

    let value = match ScoreValue::try_from(rating) {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(FieldError::new(
                "rating",
                format!(
                    "Must be between {} and {}",
                    i64::from(ScoreValue::min()),
                    i64::from(ScoreValue::max())
                ),
            ));
            None
        }
    };

    let review = review.filter(|r| !r.is_empty());
    if let Some(ref review) = review {
        if let Err(err) = validate::string_len("review", review, 3, 500) {
            errors.push(err);
        }
    }

    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    Ok(RatingDetails {
        value: value.expect("validated rating value"),
        review,
        // Flags default to false when absent
        visited: visited.unwrap_or(false),
        want_to_go: want_to_go.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_out_of_range_values() {
        for rating in [0, 6, -1, 100] {
            let result = parse_new_rating(NewShopRating {
                rating,
                ..Default::default()
            });
            assert!(matches!(result, Err(Error::Validation(_))));
        }
    }

    #[test]
    fn accept_range_bounds() {
        for rating in 1..=5 {
            assert!(parse_new_rating(NewShopRating {
                rating,
                ..Default::default()
            })
            .is_ok());
        }
    }

    #[test]
    fn flags_default_to_false() {
        let details = parse_new_rating(NewShopRating {
            rating: 4,
            ..Default::default()
        })
        .unwrap();
        assert!(!details.visited);
        assert!(!details.want_to_go);
    }

    #[test]
    fn review_length_bounds() {
        let ok = parse_new_rating(NewShopRating {
            rating: 4,
            review: Some("Great flat white".into()),
            ..Default::default()
        });
        assert!(ok.is_ok());

        let too_short = parse_new_rating(NewShopRating {
            rating: 4,
            review: Some("ok".into()),
            ..Default::default()
        });
        assert!(matches!(too_short, Err(Error::Validation(_))));

        let too_long = parse_new_rating(NewShopRating {
            rating: 4,
            review: Some("x".repeat(501)),
            ..Default::default()
        });
        assert!(matches!(too_long, Err(Error::Validation(_))));
    }
}
