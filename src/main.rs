//! # Shopping Service Demo
//!
//! Seeds an in-memory inventory, lets two customers compete for the same
//! loaf of bread, and logs what happened.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use shopping_service::gateway::InMemoryGateway;
use shopping_service::model::{Customer, Product};
use shopping_service::runtime::{setup_tracing, ShopConfig, ShopSystem};
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ShopConfig::from_env()?;
    info!(?config, "Starting shop");

    let gateway = Arc::new(InMemoryGateway::with_products([
        Product::new("bread", 3),
        Product::new("milk", 3),
    ]));
    let system = ShopSystem::with_config(gateway.clone(), config);

    let alice = Customer::new(1, "11-11-11");
    let bob = Customer::new(2, "22-22-22");

    let span = tracing::info_span!("filling_carts");
    async {
        system
            .client
            .add_to_cart(alice.clone(), Product::new("bread", 3), 2)
            .await?;
        system
            .client
            .add_to_cart(alice.clone(), Product::new("milk", 3), 3)
            .await?;
        system
            .client
            .add_to_cart(bob.clone(), Product::new("bread", 3), 2)
            .await
    }
    .instrument(span)
    .await?;

    for customer in [alice, bob] {
        let span = tracing::info_span!("checkout", customer = %customer.id());
        let result = system.client.buy(customer).instrument(span).await;
        match result {
            Ok(purchase) => info!(?purchase, "Purchase finished"),
            Err(e) => error!(error = %e, "Purchase failed"),
        }
    }

    for product in system.client.all_products().await? {
        info!(product = product.name(), count = product.count(), "Stock");
    }

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}
