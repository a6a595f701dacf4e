use thiserror::Error;

use crate::time::Timestamp;

/// A score on the 1-5 scale.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct ScoreValue(i8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Score value out of range")]
pub struct ScoreOutOfRange;

impl ScoreValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl TryFrom<i64> for ScoreValue {
    type Error = ScoreOutOfRange;

    fn try_from(from: i64) -> Result<Self, Self::Error> {
        let value = i8::try_from(from).map_err(|_| ScoreOutOfRange)?;
        let value = Self(value);
        if !value.is_valid() {
            return Err(ScoreOutOfRange);
        }
        Ok(value)
    }
}

impl From<ScoreValue> for i8 {
    fn from(from: ScoreValue) -> Self {
        from.0
    }
}

impl From<ScoreValue> for i64 {
    fn from(from: ScoreValue) -> Self {
        i64::from(from.0)
    }
}

/// Mutable part of a rating.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingDetails {
    pub value      : ScoreValue,
    pub review     : Option<String>,
    pub visited    : bool,
    pub want_to_go : bool,
}

/// A single user's review/score for a shop.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub id         : i64,
    pub shop_id    : i64,
    pub user_id    : i64,
    pub created_at : Timestamp,
    pub value      : ScoreValue,
    pub review     : Option<String>,
    pub visited    : bool,
    pub want_to_go : bool,
}

impl Rating {
    pub fn details(&self) -> RatingDetails {
        RatingDetails {
            value: self.value,
            review: self.review.clone(),
            visited: self.visited,
            want_to_go: self.want_to_go,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bounds() {
        assert!(ScoreValue::try_from(0).is_err());
        assert!(ScoreValue::try_from(6).is_err());
        assert!(ScoreValue::try_from(1).is_ok());
        assert!(ScoreValue::try_from(5).is_ok());
    }
}
