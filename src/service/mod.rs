//! # Shopping Service
//!
//! Owns the customer → cart registry and runs purchases against a
//! [`ProductGateway`].
//!
//! ## Cart identity
//!
//! Each customer has exactly one cart, created on first use. [`ShoppingService::cart`]
//! hands out a mutable borrow of that registry entry, so every call for the same
//! customer works on the same cart:
//!
//! ```rust
//! use shopping_service::gateway::InMemoryGateway;
//! use shopping_service::model::{Customer, Product};
//! use shopping_service::service::ShoppingService;
//! use std::sync::Arc;
//!
//! let mut service = ShoppingService::new(Arc::new(InMemoryGateway::new()));
//! let alice = Customer::new(1, "11-11-11");
//!
//! service.cart(&alice).add(Product::new("bread", 2), 1);
//! assert_eq!(service.cart(&alice).len(), 1);
//! ```
//!
//! ## Concurrency
//!
//! The service is synchronous and lock-free. Callers sharing one service across
//! tasks must serialize access; [`runtime::ShopSystem`](crate::runtime::ShopSystem)
//! does exactly that.

pub mod checkout;
pub mod error;

pub use checkout::Purchase;
pub use error::*;

use crate::cart::Cart;
use crate::gateway::ProductGateway;
use crate::model::{Customer, CustomerId, Product};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Cart registry plus purchase pipeline.
pub struct ShoppingService<G: ProductGateway + ?Sized> {
    gateway: Arc<G>,
    carts: HashMap<CustomerId, Cart>,
}

impl<G: ProductGateway + ?Sized> ShoppingService<G> {
    /// Creates a service over `gateway`. The gateway is shared, not owned.
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            carts: HashMap::new(),
        }
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    /// Returns the cart bound to `customer`, creating it on first request.
    pub fn cart(&mut self, customer: &Customer) -> &mut Cart {
        self.carts.entry(customer.id()).or_insert_with(|| {
            info!(customer = %customer.id(), "Cart created");
            Cart::new(customer.clone())
        })
    }

    /// Copy of the customer's cart, or `None` if it was never requested.
    pub fn cart_snapshot(&self, customer: &Customer) -> Option<Cart> {
        self.carts.get(&customer.id()).cloned()
    }

    /// Number of carts created so far.
    pub fn carts_len(&self) -> usize {
        self.carts.len()
    }

    pub fn all_products(&self) -> Result<Vec<Product>, ShoppingError> {
        Ok(self.gateway.get_all()?)
    }

    pub fn product_by_name(&self, name: &str) -> Result<Option<Product>, ShoppingError> {
        Ok(self.gateway.get_by_name(name)?)
    }

    /// Commits the customer's cart.
    ///
    /// Returns [`Purchase::NothingToDo`] when the cart is empty (or was never
    /// created) and [`Purchase::Committed`] once every line has been applied,
    /// saved, and the cart cleared. See [`checkout::commit`] for the error cases.
    pub fn buy(&mut self, customer: &Customer) -> Result<Purchase, ShoppingError> {
        match self.carts.get_mut(&customer.id()) {
            Some(cart) => checkout::commit(self.gateway.as_ref(), cart),
            None => {
                debug!(customer = %customer.id(), "No cart, nothing to buy");
                Ok(Purchase::NothingToDo)
            }
        }
    }
}
