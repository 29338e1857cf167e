//! # Shopping Service
//!
//! > **Per-customer carts committed atomically against a product inventory.**
//!
//! Customers stage purchases in a [`Cart`](cart::Cart); the
//! [`ShoppingService`](service::ShoppingService) commits a cart against a
//! [`ProductGateway`](gateway::ProductGateway): it validates every line against
//! current stock, decrements inventory, persists each product, and empties the
//! cart. Either every line is applied or none is.
//!
//! ## 🏗️ Core Concepts
//!
//! ### One cart per customer
//! The service keeps a registry of carts keyed by customer id. Asking for a
//! customer's cart twice yields the same cart, so changes made through one call
//! are visible through the next.
//!
//! ### Validate, then apply
//! A purchase runs in two passes. The first checks every line (no negative
//! quantities, enough stock) without touching anything. Only when all lines
//! pass does the second pass subtract and save. A rejected purchase leaves the
//! inventory and the cart exactly as they were.
//!
//! ### Storage behind a trait
//! The gateway is injected as an `Arc`, so the same storage can be shared with
//! other parts of an application. [`InMemoryGateway`](gateway::InMemoryGateway)
//! and the recording [`MockGateway`](gateway::mock::MockGateway) ship with the crate.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each layer defines its own error type (`ProductError`, `GatewayError`,
//! `PurchaseError`, `ShopError`). Purchase rejections keep their user-facing
//! messages verbatim through every wrapper.
//!
//! ### 2. Concurrency Model
//! The service itself is synchronous and single-threaded. The [`runtime`]
//! module runs it inside a Tokio actor, which serializes concurrent callers.
//!
//! ### 3. Observability
//! `tracing` everywhere with structured fields. See [`runtime::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - `Customer` and `Product`
//! - [`cart`] - the per-customer staging area
//! - [`gateway`] - the persistence boundary and its in-memory backends
//! - [`service`] - the cart registry and the purchase pipeline
//! - [`runtime`] - actor, client, configuration and tracing setup
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use shopping_service::gateway::InMemoryGateway;
//! use shopping_service::model::{Customer, Product};
//! use shopping_service::service::{Purchase, ShoppingService};
//! use std::sync::Arc;
//!
//! let gateway = Arc::new(InMemoryGateway::with_products([Product::new("bread", 2)]));
//! let mut service = ShoppingService::new(gateway);
//!
//! let alice = Customer::new(1, "11-11-11");
//! service.cart(&alice).add(Product::new("bread", 2), 1);
//!
//! assert_eq!(service.buy(&alice).unwrap(), Purchase::Committed { saved: 1 });
//! assert!(service.cart(&alice).is_empty());
//! assert_eq!(service.product_by_name("bread").unwrap().unwrap().count(), 1);
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart;
pub mod gateway;
pub mod model;
pub mod runtime;
pub mod service;
