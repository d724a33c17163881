//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Many items belong to exactly one restaurant by foreign key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    /// Restaurant reference (String ID)
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    /// Price in currency units, non-negative
    pub price: f64,
    /// Free-form category tag, e.g. "Mains"
    pub category: String,
    /// Image URI
    pub image: String,
    pub is_veg: bool,
    pub is_popular: bool,
    pub is_spicy: bool,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub restaurant_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub is_veg: Option<bool>,
    pub is_popular: Option<bool>,
    pub is_spicy: Option<bool>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub is_veg: Option<bool>,
    pub is_popular: Option<bool>,
    pub is_spicy: Option<bool>,
}
