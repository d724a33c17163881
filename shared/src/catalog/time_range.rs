//! Delivery-time windows
//!
//! The catalog source stores delivery estimates as display text
//! (`"25-35 min"`, `"40+ min"`). Parsing happens once at ingestion; filter
//! passes compare numeric windows and never re-parse strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delivery-time window in minutes
///
/// `max_minutes = None` marks an open-ended window (`"40+ min"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub min_minutes: u32,
    pub max_minutes: Option<u32>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeRangeError {
    #[error("malformed time range: {0:?}")]
    Malformed(String),
    #[error("inverted time range: {0}-{1}")]
    Inverted(u32, u32),
}

impl TimeRange {
    pub fn closed(min_minutes: u32, max_minutes: u32) -> Self {
        Self {
            min_minutes,
            max_minutes: Some(max_minutes),
        }
    }

    pub fn open(min_minutes: u32) -> Self {
        Self {
            min_minutes,
            max_minutes: None,
        }
    }

    /// Parse a window from display text
    ///
    /// Accepts `"25-35 min"`, `"40+ min"` and the bare bucket forms
    /// `"25-35"` / `"40+"` used in filter query strings. Anything else is
    /// [`TimeRangeError::Malformed`]; an inverted pair (`"35-25"`) is
    /// rejected rather than silently swapped.
    pub fn parse(text: &str) -> Result<Self, TimeRangeError> {
        let body = text
            .trim()
            .trim_end_matches("min")
            .trim_end_matches("mins")
            .trim();

        if let Some(lo) = body.strip_suffix('+') {
            let min_minutes = lo
                .trim()
                .parse::<u32>()
                .map_err(|_| TimeRangeError::Malformed(text.to_string()))?;
            return Ok(Self::open(min_minutes));
        }

        let (lo, hi) = body
            .split_once('-')
            .ok_or_else(|| TimeRangeError::Malformed(text.to_string()))?;
        let lo = lo
            .trim()
            .parse::<u32>()
            .map_err(|_| TimeRangeError::Malformed(text.to_string()))?;
        let hi = hi
            .trim()
            .parse::<u32>()
            .map_err(|_| TimeRangeError::Malformed(text.to_string()))?;
        if hi < lo {
            return Err(TimeRangeError::Inverted(lo, hi));
        }
        Ok(Self::closed(lo, hi))
    }

    /// Does this restaurant window satisfy a requested filter bucket?
    ///
    /// A closed bucket `[lo, hi]` matches when the windows overlap; an
    /// open bucket `lo+` matches when the window's lower bound is at
    /// least `lo`.
    pub fn matches_bucket(&self, bucket: &TimeRange) -> bool {
        match bucket.max_minutes {
            Some(hi) => {
                self.min_minutes <= hi
                    && self
                        .max_minutes
                        .is_none_or(|own_hi| own_hi >= bucket.min_minutes)
            }
            None => self.min_minutes >= bucket.min_minutes,
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max_minutes {
            Some(hi) => write!(f, "{}-{} min", self.min_minutes, hi),
            None => write!(f, "{}+ min", self.min_minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_closed() {
        assert_eq!(TimeRange::parse("25-35 min"), Ok(TimeRange::closed(25, 35)));
        assert_eq!(TimeRange::parse("10-20"), Ok(TimeRange::closed(10, 20)));
        assert_eq!(TimeRange::parse(" 20 - 30 min "), Ok(TimeRange::closed(20, 30)));
    }

    #[test]
    fn test_parse_open() {
        assert_eq!(TimeRange::parse("40+ min"), Ok(TimeRange::open(40)));
        assert_eq!(TimeRange::parse("40+"), Ok(TimeRange::open(40)));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            TimeRange::parse("soon"),
            Err(TimeRangeError::Malformed(_))
        ));
        assert!(matches!(
            TimeRange::parse("fast-ish min"),
            Err(TimeRangeError::Malformed(_))
        ));
        assert!(matches!(TimeRange::parse(""), Err(TimeRangeError::Malformed(_))));
        assert_eq!(TimeRange::parse("35-25"), Err(TimeRangeError::Inverted(35, 25)));
    }

    #[test]
    fn test_closed_bucket_overlap() {
        let window = TimeRange::closed(25, 35);
        // Overlapping buckets match
        assert!(window.matches_bucket(&TimeRange::closed(20, 30)));
        assert!(window.matches_bucket(&TimeRange::closed(30, 40)));
        assert!(window.matches_bucket(&TimeRange::closed(25, 35)));
        // Touching endpoints still count as overlap
        assert!(window.matches_bucket(&TimeRange::closed(35, 45)));
        assert!(window.matches_bucket(&TimeRange::closed(10, 25)));
        // Disjoint buckets do not
        assert!(!window.matches_bucket(&TimeRange::closed(10, 20)));
        assert!(!window.matches_bucket(&TimeRange::closed(40, 50)));
    }

    #[test]
    fn test_open_bucket_lower_bound() {
        // "40+" bucket: lower bound of the window must be >= 40
        let bucket = TimeRange::open(40);
        assert!(TimeRange::closed(40, 50).matches_bucket(&bucket));
        assert!(TimeRange::open(45).matches_bucket(&bucket));
        assert!(!TimeRange::closed(30, 45).matches_bucket(&bucket));
    }

    #[test]
    fn test_open_window_against_closed_bucket() {
        // A "40+ min" restaurant overlaps any bucket reaching 40
        let window = TimeRange::open(40);
        assert!(window.matches_bucket(&TimeRange::closed(30, 40)));
        assert!(!window.matches_bucket(&TimeRange::closed(20, 30)));
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(TimeRange::closed(25, 35).to_string(), "25-35 min");
        assert_eq!(TimeRange::open(40).to_string(), "40+ min");
    }
}
