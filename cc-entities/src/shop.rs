use std::str::FromStr;

use num_derive::{FromPrimitive, ToPrimitive};

use crate::{contact::*, geo::*, price::*, rating::ScoreValue, time::*, url::Url};

/// Category of a shop attribute value.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum AttributeKind {
    CoffeeBrand   = 0,
    MachineBrand  = 1,
    CoffeeStyle   = 2,
    DietaryOption = 3,
    SeatingOption = 4,
}

impl AttributeKind {
    // The number of different kinds, i.e. the number of enum variants
    pub const fn total_count() -> u8 {
        5
    }

    pub const fn all() -> [Self; Self::total_count() as usize] {
        use AttributeKind::*;
        [
            CoffeeBrand,
            MachineBrand,
            CoffeeStyle,
            DietaryOption,
            SeatingOption,
        ]
    }
}

/// Attribute lists of a shop, one list per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopAttributes {
    pub coffee_brands: Vec<String>,
    pub machine_brands: Vec<String>,
    pub coffee_styles: Vec<String>,
    pub dietary_options: Vec<String>,
    pub seating_options: Vec<String>,
}

impl ShopAttributes {
    pub fn list(&self, kind: AttributeKind) -> &[String] {
        use AttributeKind::*;
        match kind {
            CoffeeBrand => &self.coffee_brands,
            MachineBrand => &self.machine_brands,
            CoffeeStyle => &self.coffee_styles,
            DietaryOption => &self.dietary_options,
            SeatingOption => &self.seating_options,
        }
    }

    pub fn push(&mut self, kind: AttributeKind, value: String) {
        use AttributeKind::*;
        match kind {
            CoffeeBrand => self.coffee_brands.push(value),
            MachineBrand => self.machine_brands.push(value),
            CoffeeStyle => self.coffee_styles.push(value),
            DietaryOption => self.dietary_options.push(value),
            SeatingOption => self.seating_options.push(value),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeKind, &str)> {
        AttributeKind::all()
            .into_iter()
            .flat_map(|kind| self.list(kind).iter().map(move |v| (kind, v.as_str())))
    }

    pub fn is_empty(&self) -> bool {
        AttributeKind::all()
            .into_iter()
            .all(|kind| self.list(kind).is_empty())
    }
}

/// Quality sub-scores of a shop, each on the 1-5 scale.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualityScores {
    pub coffee_quality : Option<ScoreValue>,
    pub ambience       : Option<ScoreValue>,
    pub service        : Option<ScoreValue>,
    pub workability    : Option<ScoreValue>,
    pub menu_variety   : Option<ScoreValue>,
    pub price_value    : Option<ScoreValue>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OpeningHours(String);

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OpeningHoursParseError;

impl OpeningHours {
    pub const fn min_len() -> usize {
        2
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OpeningHours {
    type Err = OpeningHoursParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() < Self::min_len() {
            return Err(OpeningHoursParseError);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<OpeningHours> for String {
    fn from(from: OpeningHours) -> Self {
        from.0
    }
}

/// Immutable part of a shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopRecord {
    pub id: i64,
    pub user_id: i64,
    pub created_at: Timestamp,
}

/// Mutable part of a shop.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopDetails {
    pub name: String,
    pub address: String,
    pub description: String,
    pub image_url: Url,
    pub attributes: ShopAttributes,
    pub noise_level: Option<String>,
    pub price_range: PriceRange,
    pub open_now: Option<bool>,
    pub is_independent: Option<bool>,
    pub laptop_friendly: Option<bool>,
    pub scores: QualityScores,
    pub location: Option<MapPoint>,
    pub contact: Option<Contact>,
    pub opening_hours: Option<OpeningHours>,
}

// Convenience type that merges the tuple (ShopRecord, ShopDetails)
// into a single, flat struct.
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeShop {
    pub id: i64,
    pub user_id: i64,
    pub created_at: Timestamp,
    pub name: String,
    pub address: String,
    pub description: String,
    pub image_url: Url,
    pub attributes: ShopAttributes,
    pub noise_level: Option<String>,
    pub price_range: PriceRange,
    pub open_now: Option<bool>,
    pub is_independent: Option<bool>,
    pub laptop_friendly: Option<bool>,
    pub scores: QualityScores,
    pub location: Option<MapPoint>,
    pub contact: Option<Contact>,
    pub opening_hours: Option<OpeningHours>,
}

impl From<(ShopRecord, ShopDetails)> for CoffeeShop {
    fn from(from: (ShopRecord, ShopDetails)) -> Self {
        let (
            ShopRecord {
                id,
                user_id,
                created_at,
            },
            ShopDetails {
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
            },
        ) = from;
        Self {
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
        }
    }
}

impl From<CoffeeShop> for (ShopRecord, ShopDetails) {
    fn from(from: CoffeeShop) -> Self {
        let CoffeeShop {
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
        (
            ShopRecord {
                id,
                user_id,
                created_at,
            },
            ShopDetails {
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
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_round_trip() {
        let mut attributes = ShopAttributes::default();
        attributes.push(AttributeKind::CoffeeBrand, "Roastery A".into());
        attributes.push(AttributeKind::SeatingOption, "Outdoor".into());
        let collected: Vec<_> = attributes.iter().collect();
        assert_eq!(
            collected,
            vec![
                (AttributeKind::CoffeeBrand, "Roastery A"),
                (AttributeKind::SeatingOption, "Outdoor"),
            ]
        );
        assert!(!attributes.is_empty());
        assert!(ShopAttributes::default().is_empty());
    }

    #[test]
    fn opening_hours_require_content() {
        assert!(" ".parse::<OpeningHours>().is_err());
        assert!("{}".parse::<OpeningHours>().is_ok());
    }
}
