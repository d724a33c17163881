//! Cart Operations
//!
//! One cart per customer session, holding at most one line per menu item.
//! Invariant: every line has `quantity >= 1`; setting a quantity to zero
//! removes the line instead of keeping a dead entry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::MenuItem;
use crate::pricing::{to_decimal, to_f64};

/// One distinct menu item plus its quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub item: MenuItem,
    /// Always >= 1
    pub quantity: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("cart has no line for item {0}")]
    ItemNotFound(String),
}

/// Customer cart
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total quantity across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Σ price × quantity, rounded to 2 decimals
    pub fn subtotal(&self) -> f64 {
        let sum: Decimal = self
            .lines
            .iter()
            .map(|line| to_decimal(line.item.price) * Decimal::from(line.quantity))
            .sum();
        to_f64(sum)
    }

    /// Add one unit of `item`
    ///
    /// If a line for the same menu item already exists its quantity is
    /// incremented; the cart never holds duplicate lines.
    pub fn add_item(&mut self, item: MenuItem) {
        match self.lines.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartItem { item, quantity: 1 }),
        }
    }

    /// Set a line's quantity; zero removes the line
    pub fn update_quantity(&mut self, item_id: &str, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove_item(item_id);
        }
        let line = self
            .lines
            .iter_mut()
            .find(|line| line.item.id == item_id)
            .ok_or_else(|| CartError::ItemNotFound(item_id.to_string()))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Remove a line entirely
    pub fn remove_item(&mut self, item_id: &str) -> Result<(), CartError> {
        let idx = self
            .lines
            .iter()
            .position(|line| line.item.id == item_id)
            .ok_or_else(|| CartError::ItemNotFound(item_id.to_string()))?;
        self.lines.remove(idx);
        Ok(())
    }

    /// Empty the cart (invoked after a successful checkout)
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            restaurant_id: "r1".to_string(),
            name: format!("Item {id}"),
            description: String::new(),
            price,
            category: "Mains".to_string(),
            image: String::new(),
            is_veg: false,
            is_popular: false,
            is_spicy: false,
        }
    }

    #[test]
    fn test_add_same_item_increments_instead_of_duplicating() {
        let mut cart = Cart::new();
        cart.add_item(item("1-1", 12.99));
        cart.add_item(item("1-1", 12.99));
        cart.add_item(item("1-2", 4.99));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_update_quantity_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(item("1-1", 12.99));
        cart.add_item(item("1-2", 4.99));

        cart.update_quantity("1-1", 0).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert!(cart.lines().iter().all(|l| l.item.id != "1-1"));

        // Equivalent to an explicit remove
        let mut other = Cart::new();
        other.add_item(item("1-1", 12.99));
        other.add_item(item("1-2", 4.99));
        other.remove_item("1-1").unwrap();
        assert_eq!(cart.lines().len(), other.lines().len());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add_item(item("1-1", 12.99));
        cart.update_quantity("1-1", 5).unwrap();
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_unknown_item_errors() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.update_quantity("missing", 2),
            Err(CartError::ItemNotFound("missing".to_string()))
        );
        assert_eq!(
            cart.remove_item("missing"),
            Err(CartError::ItemNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        cart.add_item(item("1-1", 12.99));
        cart.update_quantity("1-1", 2).unwrap();
        cart.add_item(item("1-2", 4.99));
        assert_eq!(cart.subtotal(), 30.97);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(item("1-1", 12.99));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), 0.0);
    }
}
