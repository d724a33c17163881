//! User Profile Model
//!
//! Invariant: whenever the address / payment-method list is non-empty it
//! contains exactly one default entry. The store layer enforces this on
//! every mutation.

use serde::{Deserialize, Serialize};

/// Delivery address entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    /// Short label, e.g. "Home"
    pub label: String,
    /// Full street address
    pub details: String,
    pub is_default: bool,
}

/// Saved payment method entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    /// e.g. "card" | "wallet" | "cash"
    pub method_type: String,
    /// Display label, e.g. "Visa •••• 4242"
    pub label: String,
    pub is_default: bool,
}

/// User profile entity (single demo account, no auth)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub addresses: Vec<Address>,
    pub payment_methods: Vec<PaymentMethod>,
}

/// Update profile payload (scalar fields only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Create address payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressCreate {
    pub label: String,
    pub details: String,
    pub is_default: Option<bool>,
}

/// Create payment method payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodCreate {
    pub method_type: String,
    pub label: String,
    pub is_default: Option<bool>,
}
