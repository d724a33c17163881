//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status workflow
///
/// Linear chain `PENDING -> CONFIRMED -> PREPARING -> READY -> ASSIGNED ->
/// PICKED_UP -> ON_THE_WAY -> DELIVERED`. Cancellation is an out-of-band
/// transition available from any non-terminal state and is never returned
/// by [`OrderStatus::next`]. No backward transitions exist; advancing is
/// always caller-triggered (a dashboard button), never time-driven.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Assigned,
    PickedUp,
    OnTheWay,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The single successor in the linear chain, `None` once terminal
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            Self::Pending => Some(Self::Confirmed),
            Self::Confirmed => Some(Self::Preparing),
            Self::Preparing => Some(Self::Ready),
            Self::Ready => Some(Self::Assigned),
            Self::Assigned => Some(Self::PickedUp),
            Self::PickedUp => Some(Self::OnTheWay),
            Self::OnTheWay => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Statuses the restaurant partner advances (everything before pickup
    /// hand-off; READY -> ASSIGNED only happens through rider acceptance)
    pub fn is_partner_phase(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::Preparing)
    }

    /// Statuses the assigned rider advances
    pub fn is_rider_phase(&self) -> bool {
        matches!(self, Self::Assigned | Self::PickedUp | Self::OnTheWay)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Preparing => "PREPARING",
            Self::Ready => "READY",
            Self::Assigned => "ASSIGNED",
            Self::PickedUp => "PICKED_UP",
            Self::OnTheWay => "ON_THE_WAY",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parse the wire token (SCREAMING_SNAKE_CASE)
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "PENDING" => Some(Self::Pending),
            "CONFIRMED" => Some(Self::Confirmed),
            "PREPARING" => Some(Self::Preparing),
            "READY" => Some(Self::Ready),
            "ASSIGNED" => Some(Self::Assigned),
            "PICKED_UP" => Some(Self::PickedUp),
            "ON_THE_WAY" => Some(Self::OnTheWay),
            "DELIVERED" => Some(Self::Delivered),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line snapshot
///
/// Prices are copied from the menu at checkout time so later menu edits
/// never change a placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item reference (String ID)
    pub item_id: String,
    pub name: String,
    /// Unit price in currency units
    pub price: f64,
    pub quantity: u32,
    /// price × quantity, rounded to 2 decimals
    pub line_total: f64,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub delivery_address: String,
    pub payment_method: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub service_fee: f64,
    pub tax: f64,
    pub total: f64,
    pub status: OrderStatus,
    /// Set once a rider accepts the order
    pub rider_id: Option<String>,
    pub placed_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One requested line at checkout; the server looks the price up itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutLine {
    pub item_id: String,
    pub quantity: u32,
}

/// Checkout payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub restaurant_id: String,
    pub customer_name: String,
    pub delivery_address: String,
    pub payment_method: String,
    pub items: Vec<CheckoutLine>,
}
