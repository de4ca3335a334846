use std::fmt;

use serde::{Deserialize, Serialize};

/// Dropdown value that stands for every site at once.
pub const ALL_SITES: &str = "ALL";

/// Label shown for the [`ALL_SITES`] entry.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Current value of the site dropdown.
///
/// Values are taken as-is from the client. A site name that does not appear
/// in the table is not rejected; it simply matches no rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a raw dropdown value. `ALL` maps to [`SiteSelection::All`].
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value.to_string())
        }
    }

    /// Whether a row at `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            Self::All => true,
            Self::Site(name) => name == site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Option<String>> for SiteSelection {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::parse).unwrap_or_default()
    }
}

/// Current value of the payload range slider, in kilograms.
///
/// `low > high` is allowed. The scatter handler renders an inverted range
/// as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive on both ends. Always false when the range is inverted.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_sentinel() {
        assert_eq!(SiteSelection::parse("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::parse("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
    }

    #[test]
    fn sentinel_is_case_sensitive() {
        assert_eq!(
            SiteSelection::parse("all"),
            SiteSelection::Site("all".to_string())
        );
    }

    #[test]
    fn missing_value_defaults_to_all() {
        assert_eq!(SiteSelection::from(None), SiteSelection::All);
    }

    #[test]
    fn all_matches_every_site() {
        assert!(SiteSelection::All.matches("anything"));
        assert!(!SiteSelection::parse("A").matches("B"));
    }

    #[test]
    fn payload_range_is_inclusive() {
        let range = PayloadRange::new(1000.0, 2000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = PayloadRange::new(5000.0, 1000.0);
        assert!(range.is_inverted());
        assert!(!range.contains(3000.0));
        assert!(!range.contains(5000.0));
    }
}
