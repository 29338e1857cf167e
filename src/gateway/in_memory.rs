use super::{GatewayError, ProductGateway};
use crate::model::Product;
use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::debug;

/// Process-local product storage.
///
/// Products are kept in insertion order, so `get_all` lists them in the order
/// they were first saved.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    store: RwLock<IndexMap<String, Product>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway pre-populated with `products`.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let store = products
            .into_iter()
            .map(|p| (p.name().to_string(), p))
            .collect();
        Self {
            store: RwLock::new(store),
        }
    }

    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }
}

impl ProductGateway for InMemoryGateway {
    fn get_all(&self) -> Result<Vec<Product>, GatewayError> {
        Ok(self.store.read().values().cloned().collect())
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Product>, GatewayError> {
        let product = self.store.read().get(name).cloned();
        debug!(product = name, found = product.is_some(), "get_by_name");
        Ok(product)
    }

    fn save(&self, product: &Product) -> Result<(), GatewayError> {
        let mut store = self.store.write();
        store.insert(product.name().to_string(), product.clone());
        debug!(product = product.name(), count = product.count(), size = store.len(), "Saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_get_by_name() {
        let gateway = InMemoryGateway::new();
        assert!(gateway.is_empty());

        gateway.save(&Product::new("bread", 2)).unwrap();
        let bread = gateway.get_by_name("bread").unwrap().unwrap();
        assert_eq!(bread.count(), 2);
        assert!(gateway.get_by_name("milk").unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_by_name() {
        let gateway = InMemoryGateway::with_products([Product::new("bread", 5)]);
        gateway.save(&Product::new("bread", 1)).unwrap();

        assert_eq!(gateway.len(), 1);
        assert_eq!(gateway.get_by_name("bread").unwrap().unwrap().count(), 1);
    }

    #[test]
    fn test_get_all_keeps_insertion_order() {
        let gateway = InMemoryGateway::with_products([
            Product::new("milk", 3),
            Product::new("bread", 2),
        ]);
        gateway.save(&Product::new("eggs", 10)).unwrap();

        let names: Vec<String> = gateway
            .get_all()
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["milk", "bread", "eggs"]);
    }
}
