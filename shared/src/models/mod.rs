//! Shared data models
//!
//! Entity structs plus `*Create` / `*Update` payload structs, mirrored
//! by the HTTP layer. Prices are plain currency units (`f64`); all money
//! arithmetic goes through [`crate::pricing`] which works in `Decimal`.

pub mod menu_item;
pub mod order;
pub mod profile;
pub mod restaurant;

pub use menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};
pub use order::{CheckoutLine, CheckoutRequest, Order, OrderItem, OrderStatus};
pub use profile::{
    Address, AddressCreate, PaymentMethod, PaymentMethodCreate, UserProfile, UserProfileUpdate,
};
pub use restaurant::{PriceRange, Restaurant, RestaurantProfileUpdate};
