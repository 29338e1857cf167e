//! Error types for the persistence gateway.

use thiserror::Error;

/// Errors reported by a [`ProductGateway`](super::ProductGateway) backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    /// The backend could not be reached.
    #[error("Product storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused or failed to write a product.
    #[error("Failed to save product '{product}': {reason}")]
    SaveFailed { product: String, reason: String },
}
