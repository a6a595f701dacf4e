use thiserror::Error;

/// Inclusive price bracket of a shop on the 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: u8,
    max: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Price range out of bounds")]
pub struct PriceRangeError;

impl PriceRange {
    pub const fn min_value() -> u8 {
        1
    }

    pub const fn max_value() -> u8 {
        5
    }

    pub fn try_new(min: i64, max: i64) -> Result<Self, PriceRangeError> {
        let bounds = i64::from(Self::min_value())..=i64::from(Self::max_value());
        if !bounds.contains(&min) || !bounds.contains(&max) || min > max {
            return Err(PriceRangeError);
        }
        Ok(Self {
            min: min as u8,
            max: max as u8,
        })
    }

    pub const fn min(self) -> u8 {
        self.min
    }

    pub const fn max(self) -> u8 {
        self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Self::min_value(),
            max: Self::max_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_bracket_on_default() {
        let range = PriceRange::default();
        assert_eq!(range.min(), 1);
        assert_eq!(range.max(), 5);
    }

    #[test]
    fn reject_invalid_brackets() {
        assert!(PriceRange::try_new(0, 3).is_err());
        assert!(PriceRange::try_new(2, 6).is_err());
        assert!(PriceRange::try_new(4, 2).is_err());
        assert!(PriceRange::try_new(2, 3).is_ok());
    }
}
