//! Restaurant Model

use serde::{Deserialize, Serialize};

use crate::catalog::TimeRange;

/// Price tier, ordered from cheapest to most expensive
///
/// Serialized as the literal dollar tokens (`"$"` .. `"$$$$"`) the
/// storefront displays and the filter query accepts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Premium,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceRange {
    /// Parse a dollar token, `None` for anything else
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "$" => Some(Self::Budget),
            "$$" => Some(Self::Moderate),
            "$$$" => Some(Self::Premium),
            "$$$$" => Some(Self::Luxury),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Premium => "$$$",
            Self::Luxury => "$$$$",
        }
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restaurant entity
///
/// Read-only reference data owned by an external catalog service; the
/// storefront ingests snapshots and only lets a partner edit its own
/// profile fields and menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    /// URL identity, e.g. `pizza-italia`
    pub slug: String,
    pub name: String,
    /// Non-empty; insertion order preserved for display, irrelevant for matching
    pub cuisines: Vec<String>,
    /// In [0.0, 5.0]
    pub rating: f64,
    /// Display text, e.g. "25-35 min"
    pub delivery_time: String,
    /// Numeric window parsed once at ingestion; `None` when the source
    /// text was malformed (such restaurants fail every time-bucket filter)
    pub delivery_window: Option<TimeRange>,
    pub price_range: PriceRange,
    /// Per-restaurant fee in currency units
    pub delivery_fee: f64,
    /// Display only, not enforced at checkout
    pub min_order: f64,
    pub is_promoted: bool,
    pub discount: Option<String>,
}

impl Restaurant {
    /// Re-derive the numeric delivery window from the display text
    ///
    /// Called at ingestion and again whenever a partner edits
    /// `delivery_time`. Malformed text yields `None` and a warning.
    pub fn reparse_delivery_window(&mut self) {
        self.delivery_window = match TimeRange::parse(&self.delivery_time) {
            Ok(range) => Some(range),
            Err(e) => {
                tracing::warn!(
                    restaurant = %self.id,
                    text = %self.delivery_time,
                    error = %e,
                    "delivery time text failed to parse, time filters will exclude this restaurant"
                );
                None
            }
        };
    }
}

/// Update restaurant profile payload (partner dashboard)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantProfileUpdate {
    pub name: Option<String>,
    pub cuisines: Option<Vec<String>>,
    pub rating: Option<f64>,
    /// Changing this re-parses `delivery_window` server-side
    pub delivery_time: Option<String>,
    pub price_range: Option<PriceRange>,
    pub delivery_fee: Option<f64>,
    pub min_order: Option<f64>,
    pub is_promoted: Option<bool>,
    pub discount: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_ordering() {
        assert!(PriceRange::Budget < PriceRange::Moderate);
        assert!(PriceRange::Premium < PriceRange::Luxury);
    }

    #[test]
    fn test_price_range_parse() {
        assert_eq!(PriceRange::parse("$$"), Some(PriceRange::Moderate));
        assert_eq!(PriceRange::parse(" $$$$ "), Some(PriceRange::Luxury));
        assert_eq!(PriceRange::parse("$$$$$"), None);
        assert_eq!(PriceRange::parse("cheap"), None);
    }

    #[test]
    fn test_price_range_serde_tokens() {
        let json = serde_json::to_string(&PriceRange::Premium).unwrap();
        assert_eq!(json, "\"$$$\"");
        let back: PriceRange = serde_json::from_str("\"$\"").unwrap();
        assert_eq!(back, PriceRange::Budget);
    }

    #[test]
    fn test_reparse_delivery_window() {
        let mut r = Restaurant {
            id: "r1".into(),
            slug: "r1".into(),
            name: "R1".into(),
            cuisines: vec!["Thai".into()],
            rating: 4.0,
            delivery_time: "25-35 min".into(),
            delivery_window: None,
            price_range: PriceRange::Moderate,
            delivery_fee: 1.99,
            min_order: 10.0,
            is_promoted: false,
            discount: None,
        };
        r.reparse_delivery_window();
        assert_eq!(r.delivery_window, Some(TimeRange::closed(25, 35)));

        r.delivery_time = "soon-ish".into();
        r.reparse_delivery_window();
        assert_eq!(r.delivery_window, None);
    }
}
