use crate::url::Url;

/// Contact details and outbound links of a shop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    /// The shop's own web presence
    pub website: Option<Url>,

    /// A phone number to get in contact
    pub phone: Option<String>,

    /// Link to the shop's page at the maps provider
    pub maps_url: Option<Url>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.website.is_none() && self.phone.is_none() && self.maps_url.is_none()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn empty_contact() {
        assert!(Contact::default().is_empty());
        let c = Contact {
            phone: Some("123".into()),
            ..Default::default()
        };
        assert!(!c.is_empty());
        let c = Contact {
            website: Some("https://cafe.example".parse().unwrap()),
            ..Default::default()
        };
        assert!(!c.is_empty());
    }
}
