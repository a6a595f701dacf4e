use cc_boundary::CoffeeShop;

/// The full price bracket, i.e. the price filter is inactive.
pub const FULL_PRICE_RANGE: (u8, u8) = (1, 5);

/// Active filter values of the shop list.
///
/// Filtering happens entirely client-side over the full,
/// already-fetched list; there is no server-side filtering
/// and no pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopFilter {
    /// Matched against name and address, case-insensitive.
    /// Lives in the search box, not in the filter panel.
    pub text: String,
    pub price_range: (u8, u8),
    pub open_now: bool,
    pub is_independent: Option<bool>,
    pub laptop_friendly: bool,
    pub coffee_styles: Vec<String>,
    pub coffee_brands: Vec<String>,
    pub machine_brands: Vec<String>,
    pub dietary_options: Vec<String>,
    pub noise_levels: Vec<String>,
    pub seating_options: Vec<String>,
}

impl Default for ShopFilter {
    fn default() -> Self {
        Self {
            text: String::new(),
            price_range: FULL_PRICE_RANGE,
            open_now: false,
            is_independent: None,
            laptop_friendly: false,
            coffee_styles: vec![],
            coffee_brands: vec![],
            machine_brands: vec![],
            dietary_options: vec![],
            noise_levels: vec![],
            seating_options: vec![],
        }
    }
}

impl ShopFilter {
    /// The number of active filters, displayed as badge
    /// on the filter panel. The text query does not count.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.price_range != FULL_PRICE_RANGE {
            count += 1;
        }
        if self.open_now {
            count += 1;
        }
        if self.is_independent.is_some() {
            count += 1;
        }
        if self.laptop_friendly {
            count += 1;
        }
        for selection in [
            &self.coffee_styles,
            &self.coffee_brands,
            &self.machine_brands,
            &self.dietary_options,
            &self.noise_levels,
            &self.seating_options,
        ] {
            if !selection.is_empty() {
                count += 1;
            }
        }
        count
    }

    #[must_use]
    pub fn matches(&self, shop: &CoffeeShop) -> bool {
        let text = self.text.trim();
        if !text.is_empty() {
            let needle = text.to_lowercase();
            if !shop.name.to_lowercase().contains(&needle)
                && !shop.address.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if self.price_range != FULL_PRICE_RANGE {
            let (min, max) = self.price_range;
            let (shop_min, shop_max) = shop.price_range;
            // Overlapping brackets match
            if shop_max < min || shop_min > max {
                return false;
            }
        }
        if self.open_now && shop.open_now != Some(true) {
            return false;
        }
        if let Some(independent) = self.is_independent {
            if shop.is_independent != Some(independent) {
                return false;
            }
        }
        if self.laptop_friendly && shop.laptop_friendly != Some(true) {
            return false;
        }
        if !self.coffee_styles.is_empty() && !intersects(&self.coffee_styles, &shop.coffee_styles) {
            return false;
        }
        if !self.coffee_brands.is_empty() && !intersects(&self.coffee_brands, &shop.coffee_brands) {
            return false;
        }
        if !self.machine_brands.is_empty()
            && !intersects(&self.machine_brands, &shop.machine_brands)
        {
            return false;
        }
        if !self.dietary_options.is_empty()
            && !intersects(&self.dietary_options, &shop.dietary_options)
        {
            return false;
        }
        if !self.seating_options.is_empty()
            && !intersects(&self.seating_options, &shop.seating_options)
        {
            return false;
        }
        if !self.noise_levels.is_empty() {
            let Some(level) = &shop.noise_level else {
                return false;
            };
            if !self.noise_levels.iter().any(|l| l == level) {
                return false;
            }
        }
        true
    }

    #[must_use]
    pub fn apply<'a>(&self, shops: &'a [CoffeeShop]) -> Vec<&'a CoffeeShop> {
        shops.iter().filter(|shop| self.matches(shop)).collect()
    }
}

fn intersects(selection: &[String], values: &[String]) -> bool {
    selection
        .iter()
        .any(|selected| values.iter().any(|value| value == selected))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop(name: &str, address: &str) -> CoffeeShop {
        CoffeeShop {
            id: 1,
            user_id: 1,
            created_at: 0,
            name: name.to_string(),
            address: address.to_string(),
            description: "A cozy corner cafe".into(),
            image_url: "https://x/y.jpg".into(),
            coffee_brands: vec![],
            machine_brands: vec![],
            coffee_styles: vec![],
            dietary_options: vec![],
            seating_options: vec![],
            noise_level: None,
            price_range: (1, 5),
            open_now: None,
            is_independent: None,
            laptop_friendly: None,
            coffee_quality: None,
            ambience: None,
            service: None,
            workability: None,
            menu_variety: None,
            price_value: None,
            latitude: None,
            longitude: None,
            website: None,
            phone: None,
            maps_url: None,
            opening_hours: None,
        }
    }

    #[test]
    fn default_filter_matches_everything_and_counts_zero() {
        let filter = ShopFilter::default();
        assert_eq!(filter.active_count(), 0);
        assert!(filter.matches(&shop("Blue Cup", "12 Market St")));
    }

    #[test]
    fn each_active_filter_increments_the_count() {
        let filter = ShopFilter {
            price_range: (2, 2),
            open_now: true,
            is_independent: Some(true),
            coffee_brands: vec!["Roastery A".into()],
            noise_levels: vec!["quiet".into()],
            ..Default::default()
        };
        assert_eq!(filter.active_count(), 5);
    }

    #[test]
    fn text_matches_name_and_address_case_insensitively() {
        let filter = ShopFilter {
            text: "blue".into(),
            ..Default::default()
        };
        assert!(filter.matches(&shop("Blue Cup", "12 Market St")));
        assert!(!filter.matches(&shop("Red Mug", "12 Market St")));

        let filter = ShopFilter {
            text: "market".into(),
            ..Default::default()
        };
        assert!(filter.matches(&shop("Red Mug", "12 Market St")));
    }

    #[test]
    fn brand_selection_matches_by_intersection() {
        let mut subject = shop("Blue Cup", "12 Market St");
        subject.coffee_brands = vec!["Roastery A".into(), "Roastery B".into()];
        let filter = ShopFilter {
            coffee_brands: vec!["Roastery B".into(), "Roastery C".into()],
            ..Default::default()
        };
        assert!(filter.matches(&subject));

        let filter = ShopFilter {
            coffee_brands: vec!["Roastery C".into()],
            ..Default::default()
        };
        assert!(!filter.matches(&subject));
    }

    #[test]
    fn price_brackets_match_by_overlap() {
        let mut subject = shop("Blue Cup", "12 Market St");
        subject.price_range = (2, 3);
        let filter = ShopFilter {
            price_range: (3, 4),
            ..Default::default()
        };
        assert!(filter.matches(&subject));

        let filter = ShopFilter {
            price_range: (4, 5),
            ..Default::default()
        };
        assert!(!filter.matches(&subject));
    }

    #[test]
    fn open_now_requires_the_flag() {
        let filter = ShopFilter {
            open_now: true,
            ..Default::default()
        };
        let mut subject = shop("Blue Cup", "12 Market St");
        assert!(!filter.matches(&subject));
        subject.open_now = Some(true);
        assert!(filter.matches(&subject));
    }

    #[test]
    fn apply_keeps_only_matching_shops() {
        let shops = vec![
            shop("Blue Cup", "12 Market St"),
            shop("Red Mug", "3 Harbor Rd"),
        ];
        let filter = ShopFilter {
            text: "harbor".into(),
            ..Default::default()
        };
        let filtered = filter.apply(&shops);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Red Mug");
    }
}
