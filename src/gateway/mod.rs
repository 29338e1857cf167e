//! # Product Gateway
//!
//! The persistence boundary of the shop. The service never touches storage
//! directly; it only needs three capabilities, expressed by the
//! [`ProductGateway`] trait:
//!
//! - `get_all` - list every product
//! - `get_by_name` - fetch one product by its identity key
//! - `save` - persist a product's current state
//!
//! ## Backends
//!
//! - [`InMemoryGateway`] - a process-local store, used by the demo binary and the runtime tests
//! - [`mock::MockGateway`] - an in-memory store that records every call and can inject failures
//!
//! A SQL or remote backend plugs in the same way: implement the trait and hand an
//! `Arc` of it to [`ShoppingService::new`](crate::service::ShoppingService::new).

pub mod error;
pub mod in_memory;
pub mod mock;

pub use error::*;
pub use in_memory::InMemoryGateway;

use crate::model::Product;

/// Abstract access to durable product storage.
///
/// Implementations must be shareable across threads so a service can be moved
/// into the runtime's actor task.
pub trait ProductGateway: Send + Sync {
    /// Returns every stored product.
    fn get_all(&self) -> Result<Vec<Product>, GatewayError>;

    /// Returns the product stored under `name`, or `None` if there is none.
    fn get_by_name(&self, name: &str) -> Result<Option<Product>, GatewayError>;

    /// Persists `product`, replacing any stored product with the same name.
    fn save(&self, product: &Product) -> Result<(), GatewayError>;
}
