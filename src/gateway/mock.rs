//! # Mock Gateway & Testing Guide
//!
//! [`MockGateway`] implements [`ProductGateway`] on top of an in-memory store and
//! records every call made through it. Tests use it to assert *how* the service
//! talked to storage (which products were saved, how often, whether storage was
//! touched at all) and to simulate storage failures that are hard to produce
//! with a real backend.
//!
//! ## When to use Mock vs InMemory
//!
//! | Feature | MockGateway | InMemoryGateway |
//! |---------|-------------|-----------------|
//! | **State** | Real (in-memory) | Real (in-memory) |
//! | **Call log** | Yes (`calls`, `save_count`) | No |
//! | **Error Injection** | Easy (`fail_saves_for`) | None |
//! | **Use Case** | Verifying the purchase pipeline | Demo, runtime tests |
//!
//! ## Example
//!
//! ```rust
//! use shopping_service::gateway::mock::MockGateway;
//! use shopping_service::model::{Customer, Product};
//! use shopping_service::service::ShoppingService;
//! use std::sync::Arc;
//!
//! let gateway = Arc::new(MockGateway::with_products([Product::new("bread", 5)]));
//! let mut service = ShoppingService::new(gateway.clone());
//!
//! let alice = Customer::new(1, "11-11-11");
//! service.cart(&alice).add(Product::new("bread", 5), 5);
//! assert!(service.buy(&alice).unwrap().is_committed());
//!
//! assert_eq!(gateway.save_count("bread"), 1);
//! assert_eq!(gateway.product("bread").unwrap().count(), 0);
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use shopping_service::gateway::mock::MockGateway;
//! use shopping_service::gateway::{GatewayError, ProductGateway};
//! use shopping_service::model::Product;
//!
//! let gateway = MockGateway::with_products([Product::new("milk", 3)]);
//! gateway.fail_saves_for("milk", GatewayError::Unavailable("db down".into()));
//!
//! let result = gateway.save(&Product::new("milk", 1));
//! assert!(matches!(result, Err(GatewayError::Unavailable(_))));
//! assert_eq!(gateway.product("milk").unwrap().count(), 3);
//! ```

use super::{GatewayError, InMemoryGateway, ProductGateway};
use crate::model::Product;
use parking_lot::Mutex;
use std::collections::HashMap;

/// A single recorded interaction with the gateway.
#[derive(Debug, Clone)]
pub enum GatewayCall {
    GetAll,
    GetByName(String),
    /// Snapshot of the product as it was handed to `save`.
    Save(Product),
}

/// A recording gateway with failure injection.
#[derive(Debug, Default)]
pub struct MockGateway {
    store: InMemoryGateway,
    calls: Mutex<Vec<GatewayCall>>,
    save_failures: Mutex<HashMap<String, GatewayError>>,
}

impl MockGateway {
    /// Creates an empty mock gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock gateway whose store is pre-populated with `products`.
    /// Seeding is not recorded as calls.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            store: InMemoryGateway::with_products(products),
            ..Self::default()
        }
    }

    /// Makes every subsequent `save` of the named product fail with `error`.
    pub fn fail_saves_for(&self, name: impl Into<String>, error: GatewayError) {
        self.save_failures.lock().insert(name.into(), error);
    }

    /// Returns all recorded calls in the order they were made.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().clone()
    }

    /// Number of `save` calls made for the named product, failed ones included.
    pub fn save_count(&self, name: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, GatewayCall::Save(p) if p.name() == name))
            .count()
    }

    /// Snapshots passed to `save` for the named product, oldest first.
    pub fn saved(&self, name: &str) -> Vec<Product> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                GatewayCall::Save(p) if p.name() == name => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    /// Reads the stored state of a product without recording a call.
    pub fn product(&self, name: &str) -> Option<Product> {
        self.store.get_by_name(name).ok().flatten()
    }

    /// Panics if the gateway was used at all.
    pub fn verify_no_interactions(&self) {
        let calls = self.calls.lock();
        if !calls.is_empty() {
            panic!("Expected no gateway interactions, got {}: {:?}", calls.len(), *calls);
        }
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().push(call);
    }
}

impl ProductGateway for MockGateway {
    fn get_all(&self) -> Result<Vec<Product>, GatewayError> {
        self.record(GatewayCall::GetAll);
        self.store.get_all()
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Product>, GatewayError> {
        self.record(GatewayCall::GetByName(name.to_string()));
        self.store.get_by_name(name)
    }

    fn save(&self, product: &Product) -> Result<(), GatewayError> {
        self.record(GatewayCall::Save(product.clone()));
        if let Some(error) = self.save_failures.lock().get(product.name()) {
            return Err(error.clone());
        }
        self.store.save(product)
    }
}
