use std::fmt;

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A point in time as unix timestamp with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(self) -> i64 {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.unix_timestamp())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match OffsetDateTime::from_unix_timestamp(self.0) {
            Ok(dt) => match dt.format(&Rfc3339) {
                Ok(formatted) => f.write_str(&formatted),
                Err(_) => write!(f, "{}", self.0),
            },
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_secs() {
        let t1 = Timestamp::now();
        let s1 = t1.as_secs();
        let t2 = Timestamp::from_secs(s1);
        assert_eq!(t1, t2);
    }

    #[test]
    fn display_rfc3339() {
        let t = Timestamp::from_secs(0);
        assert_eq!(t.to_string(), "1970-01-01T00:00:00Z");
    }
}
