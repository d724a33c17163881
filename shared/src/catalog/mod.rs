//! Catalog filtering
//!
//! - [`TimeRange`] - numeric delivery-time window, parsed once at ingestion
//! - [`FilterSpec`] - the combined narrowing criteria a user has selected
//! - [`filter_restaurants`] - the single filter implementation every
//!   screen shares

pub mod filter;
pub mod time_range;

pub use filter::{FilterSpec, filter_restaurants};
pub use time_range::{TimeRange, TimeRangeError};
