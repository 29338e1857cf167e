//! Error types for the shop runtime.

use crate::service::ShoppingError;
use thiserror::Error;

/// Errors that can occur when talking to the shop actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    /// The actor's request channel is closed.
    #[error("Shop actor closed")]
    ActorClosed,

    /// The actor dropped the response channel without answering.
    #[error("Shop actor dropped response channel")]
    ActorDropped,

    /// The actor task panicked or was cancelled.
    #[error("Shop actor task failed: {0}")]
    TaskFailed(String),

    /// The service itself rejected the request.
    #[error(transparent)]
    Shopping(#[from] ShoppingError),
}
