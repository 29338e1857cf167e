//! Error types for the inventory model.

use thiserror::Error;

/// Errors raised when a product's stock is changed with an invalid amount.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The amount to subtract was negative.
    #[error("Invalid argument: cannot subtract negative amount {amount} from '{product}'")]
    NegativeAmount { product: String, amount: i64 },

    /// The amount to subtract is larger than the available count.
    #[error("Invalid argument: cannot subtract {requested} from '{product}', available {available}")]
    ExceedsStock {
        product: String,
        requested: i64,
        available: u32,
    },
}
