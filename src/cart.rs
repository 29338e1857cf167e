//! # Cart
//!
//! A cart stages a customer's purchase intent as (product → quantity) lines.
//!
//! ```text
//! EMPTY ──add──▶ FILLED ──buy (committed)──▶ EMPTY
//!                  │
//!                  └──buy (rejected)──▶ FILLED (unchanged)
//! ```
//!
//! The cart never looks at inventory: stock can change between `add` and the
//! commit, so availability is checked by [`checkout::commit`](crate::service::checkout::commit).
//! Negative quantities are stored as given so the commit can reject them with a
//! precise error.

use crate::model::{Customer, Product};
use indexmap::IndexMap;
use tracing::debug;

/// Per-customer staging of pending purchases.
#[derive(Debug, Clone)]
pub struct Cart {
    customer: Customer,
    lines: IndexMap<Product, i64>,
}

impl Cart {
    /// Creates an empty cart bound to `customer`.
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            lines: IndexMap::new(),
        }
    }

    /// The customer this cart belongs to. The binding never changes.
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Adds `quantity` units of `product`.
    ///
    /// Re-adding a product already in the cart sums the quantities; the line
    /// keeps its first position.
    pub fn add(&mut self, product: Product, quantity: i64) {
        debug!(customer = %self.customer.id(), product = product.name(), quantity, "Add to cart");
        let line = self.lines.entry(product).or_insert(0);
        *line = line.saturating_add(quantity);
    }

    /// Sets the quantity of `product` outright. A quantity of zero or less
    /// removes the line.
    pub fn edit(&mut self, product: Product, quantity: i64) {
        debug!(customer = %self.customer.id(), product = product.name(), quantity, "Edit cart");
        if quantity <= 0 {
            self.lines.shift_remove(&product);
        } else {
            self.lines.insert(product, quantity);
        }
    }

    /// Removes the line for `product`, returning its quantity.
    pub fn remove(&mut self, product: &Product) -> Option<i64> {
        self.lines.shift_remove(product)
    }

    /// Snapshot of the current lines in insertion order.
    ///
    /// The snapshot does not follow later changes to the cart.
    pub fn products(&self) -> IndexMap<Product, i64> {
        self.lines.clone()
    }

    /// Iterates over the lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = (&Product, i64)> {
        self.lines.iter().map(|(product, quantity)| (product, *quantity))
    }

    pub fn quantity_of(&self, product: &Product) -> Option<i64> {
        self.lines.get(product).copied()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart() -> Cart {
        Cart::new(Customer::new(1, "11-11-11"))
    }

    #[test]
    fn test_add_sums_repeated_product() {
        let mut cart = cart();
        cart.add(Product::new("bread", 5), 1);
        cart.add(Product::new("bread", 5), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(&Product::new("bread", 0)), Some(3));
    }

    #[test]
    fn test_add_keeps_negative_quantity() {
        let mut cart = cart();
        cart.add(Product::new("bread", 3), -2);
        assert_eq!(cart.quantity_of(&Product::new("bread", 3)), Some(-2));
    }

    #[test]
    fn test_lines_follow_insertion_order() {
        let mut cart = cart();
        cart.add(Product::new("milk", 3), 1);
        cart.add(Product::new("bread", 2), 1);
        cart.add(Product::new("milk", 3), 1);

        let names: Vec<&str> = cart.lines().map(|(p, _)| p.name()).collect();
        assert_eq!(names, vec!["milk", "bread"]);
    }

    #[test]
    fn test_edit_replaces_and_removes() {
        let mut cart = cart();
        let bread = Product::new("bread", 5);
        cart.add(bread.clone(), 4);

        cart.edit(bread.clone(), 1);
        assert_eq!(cart.quantity_of(&bread), Some(1));

        cart.edit(bread.clone(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_returns_quantity() {
        let mut cart = cart();
        let milk = Product::new("milk", 3);
        cart.add(milk.clone(), 2);

        assert_eq!(cart.remove(&milk), Some(2));
        assert_eq!(cart.remove(&milk), None);
    }

    #[test]
    fn test_products_is_a_snapshot() {
        let mut cart = cart();
        cart.add(Product::new("bread", 2), 1);
        let snapshot = cart.products();

        cart.clear();
        assert_eq!(snapshot.len(), 1);
        assert!(cart.products().is_empty());
        assert_eq!(cart.customer().phone(), "11-11-11");
    }
}
