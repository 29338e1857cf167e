//! Runtime orchestration and lifecycle management.
//!
//! The [`ShoppingService`](crate::service::ShoppingService) is synchronous and
//! expects its callers to take turns. This module provides the turn-taking:
//! an actor that owns the service and a cloneable client that any number of
//! tasks can share.
//!
//! # Main Components
//!
//! - [`ShopSystem`] - Starts the actor and shuts it down gracefully
//! - [`ShopActor`] / [`ShopClient`] - The server and client halves of the actor
//! - [`ShopConfig`] - Channel sizing, optionally read from the environment
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod actor;
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod system;
pub mod tracing;

pub use actor::ShopActor;
pub use client::ShopClient;
pub use config::{ConfigError, ShopConfig};
pub use error::ShopError;
pub use message::{Response, ShopRequest};
pub use system::ShopSystem;
pub use self::tracing::setup_tracing;
