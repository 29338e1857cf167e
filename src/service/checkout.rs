//! The purchase-commit transaction.
//!
//! [`commit`] runs in two passes over the cart lines, in insertion order:
//!
//! 1. **Validate** every line against the gateway's current stock. Nothing is
//!    mutated or saved in this pass.
//! 2. **Apply** each validated line: subtract the quantity, then `save` the
//!    product. Saves follow the same order as the lines.
//!
//! Only after the last save is the cart cleared. A rejected line therefore
//! leaves both the inventory and the cart exactly as they were.
//!
//! Stock is read from the gateway whenever the gateway knows the product, so a
//! commit observes every earlier commit against it. A product the gateway has
//! no record of is checked and saved from the snapshot the cart carries.

use super::error::{PurchaseError, ShoppingError};
use crate::cart::Cart;
use crate::gateway::ProductGateway;
use crate::model::Product;
use tracing::{debug, info, warn};

/// Successful outcome of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
    /// The cart was committed; `saved` products were written to the gateway.
    Committed { saved: usize },
    /// The cart was empty; nothing was read, written, or changed.
    NothingToDo,
}

impl Purchase {
    pub fn is_committed(&self) -> bool {
        matches!(self, Purchase::Committed { .. })
    }
}

/// Commits `cart` against `gateway`.
///
/// # Errors
/// - [`PurchaseError`] if any line is negative or exceeds the available stock.
///   The cart is left intact.
/// - [`GatewayError`](crate::gateway::GatewayError) if a read or a save fails.
///   Saves made before the failure are not rolled back.
pub fn commit<G>(gateway: &G, cart: &mut Cart) -> Result<Purchase, ShoppingError>
where
    G: ProductGateway + ?Sized,
{
    let customer = cart.customer().id();
    if cart.is_empty() {
        debug!(%customer, "Empty cart, nothing to buy");
        return Ok(Purchase::NothingToDo);
    }

    let staged = match validate(gateway, cart) {
        Ok(staged) => staged,
        Err(e) => {
            warn!(%customer, error = %e, "Purchase rejected");
            return Err(e);
        }
    };

    let saved = staged.len();
    for (mut product, quantity) in staged {
        product.subtract_count(quantity)?;
        if let Err(e) = gateway.save(&product) {
            warn!(%customer, product = product.name(), error = %e, "Save failed");
            return Err(e.into());
        }
        debug!(%customer, product = product.name(), quantity, remaining = product.count(), "Line applied");
    }

    cart.clear();
    info!(%customer, saved, "Purchase committed");
    Ok(Purchase::Committed { saved })
}

/// Checks every line and returns the products to apply, paired with their
/// quantities. Zero-quantity lines are dropped.
fn validate<G>(gateway: &G, cart: &Cart) -> Result<Vec<(Product, i64)>, ShoppingError>
where
    G: ProductGateway + ?Sized,
{
    let mut staged = Vec::with_capacity(cart.len());
    for (product, quantity) in cart.lines() {
        let name = product.name();
        if quantity < 0 {
            return Err(PurchaseError::NegativeQuantity {
                product: name.to_string(),
            }
            .into());
        }
        if quantity == 0 {
            continue;
        }

        let current = match gateway.get_by_name(name)? {
            Some(current) => current,
            None => {
                debug!(product = name, "Not in storage, using cart snapshot");
                product.clone()
            }
        };
        if quantity > i64::from(current.count()) {
            return Err(PurchaseError::InsufficientStock {
                product: name.to_string(),
            }
            .into());
        }
        staged.push((current, quantity));
    }
    Ok(staged)
}
