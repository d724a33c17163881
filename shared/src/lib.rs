//! Shared domain core for the Quickbite storefront
//!
//! The pure computation layer consumed by every screen/server surface:
//! catalog models and filtering, cart operations, order totals, and the
//! order status workflow. Everything here is synchronous, allocation-light
//! and side-effect free so the same code backs the customer, partner,
//! rider and admin views without drift.

pub mod cart;
pub mod catalog;
pub mod models;
pub mod pricing;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Catalog re-exports (for convenient access)
pub use catalog::{FilterSpec, TimeRange, filter_restaurants};

// Cart / pricing re-exports
pub use cart::{Cart, CartError, CartItem};
pub use pricing::{FeeSchedule, OrderTotals, calculate_totals};
