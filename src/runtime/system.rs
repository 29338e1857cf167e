use super::actor::ShopActor;
use super::client::ShopClient;
use super::config::ShopConfig;
use super::error::ShopError;
use crate::gateway::ProductGateway;
use std::sync::Arc;
use tracing::{error, info};

/// Runtime orchestrator for the shop.
///
/// `ShopSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the shop actor
/// - **Dependency Wiring**: Handing the product gateway to the service the actor owns
///
/// # Example
///
/// ```rust
/// use shopping_service::gateway::InMemoryGateway;
/// use shopping_service::model::{Customer, Product};
/// use shopping_service::runtime::ShopSystem;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let gateway = Arc::new(InMemoryGateway::with_products([Product::new("bread", 2)]));
///     let system = ShopSystem::new(gateway);
///
///     let alice = Customer::new(1, "11-11-11");
///     system.client.add_to_cart(alice.clone(), Product::new("bread", 2), 1).await?;
///     assert!(system.client.buy(alice).await?.is_committed());
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct ShopSystem {
    /// Client for interacting with the shop actor
    pub client: ShopClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl ShopSystem {
    /// Starts a shop over `gateway` with the default configuration.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new<G>(gateway: Arc<G>) -> Self
    where
        G: ProductGateway + ?Sized + 'static,
    {
        Self::with_config(gateway, ShopConfig::default())
    }

    /// Starts a shop over `gateway` using `config`.
    pub fn with_config<G>(gateway: Arc<G>, config: ShopConfig) -> Self
    where
        G: ProductGateway + ?Sized + 'static,
    {
        let (actor, client) = ShopActor::new(gateway, config.capacity());
        let handle = tokio::spawn(actor.run());
        info!(channel_capacity = config.channel_capacity(), "Shop system started");
        Self { client, handle }
    }

    /// Gracefully shuts down the shop.
    ///
    /// Drops this system's client and waits for the actor to drain its queue.
    /// Clones of the client handed out earlier keep the actor alive until they
    /// are dropped too.
    pub async fn shutdown(self) -> Result<(), ShopError> {
        info!("Shutting down shop...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Shop actor task failed: {:?}", e);
            return Err(ShopError::TaskFailed(e.to_string()));
        }

        info!("Shop shutdown complete.");
        Ok(())
    }
}
