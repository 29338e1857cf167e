use crate::model::ProductError;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Represents a product in the inventory.
///
/// The name is the product's identity: equality and hashing only look at it,
/// so a product fetched fresh from a [`ProductGateway`](crate::gateway::ProductGateway)
/// matches the one previously placed in a [`Cart`](crate::cart::Cart).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    name: String,
    count: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `name` - Product name, also used as the persistence key
    /// * `count` - Units currently available
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Removes `amount` units from the available count.
    ///
    /// # Errors
    /// - [`ProductError::NegativeAmount`] if `amount < 0`
    /// - [`ProductError::ExceedsStock`] if `amount` is larger than the available count
    pub fn subtract_count(&mut self, amount: i64) -> Result<(), ProductError> {
        if amount < 0 {
            return Err(ProductError::NegativeAmount {
                product: self.name.clone(),
                amount,
            });
        }
        let available = i64::from(self.count);
        if amount > available {
            return Err(ProductError::ExceedsStock {
                product: self.name.clone(),
                requested: amount,
                available: self.count,
            });
        }
        // amount fits in u32 since 0 <= amount <= count
        self.count = (available - amount) as u32;
        Ok(())
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
