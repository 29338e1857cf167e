//! Error types for the shopping service.

use crate::gateway::GatewayError;
use crate::model::ProductError;
use thiserror::Error;

/// A cart line violated a quantity or inventory rule.
///
/// The messages are user-facing and kept verbatim.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PurchaseError {
    /// The line asks for a negative number of units.
    #[error("Нельзя приобрести отрицательное количество товара '{product}'")]
    NegativeQuantity { product: String },

    /// The line asks for more units than are available.
    #[error("В наличии нет необходимого количества товара '{product}'")]
    InsufficientStock { product: String },
}

impl PurchaseError {
    /// Name of the offending product.
    pub fn product(&self) -> &str {
        match self {
            PurchaseError::NegativeQuantity { product }
            | PurchaseError::InsufficientStock { product } => product,
        }
    }
}

/// Errors returned by [`ShoppingService`](super::ShoppingService) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShoppingError {
    #[error(transparent)]
    Purchase(#[from] PurchaseError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Product(#[from] ProductError),
}
