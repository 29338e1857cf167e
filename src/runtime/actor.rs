//! # Shop Actor
//!
//! The "server" half of the runtime. [`ShopActor`] owns a [`ShoppingService`] and
//! processes [`ShopRequest`]s one at a time in its own Tokio task. Because the
//! service is only ever touched from that task, concurrent callers are
//! serialized without any locking: two purchases racing for the same stock are
//! committed one after the other, and the second sees the first one's decrement.

use super::client::ShopClient;
use super::message::ShopRequest;
use crate::gateway::ProductGateway;
use crate::service::ShoppingService;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct ShopActor<G: ProductGateway + ?Sized> {
    receiver: mpsc::Receiver<ShopRequest>,
    service: ShoppingService<G>,
}

impl<G: ProductGateway + ?Sized> ShopActor<G> {
    /// Creates a new `ShopActor` and its associated `ShopClient`.
    ///
    /// # Arguments
    ///
    /// * `gateway` - Product storage shared with the service
    /// * `buffer_size` - The capacity of the request channel. When the channel
    ///   is full, client calls wait until there is space.
    pub fn new(gateway: Arc<G>, buffer_size: NonZeroUsize) -> (Self, ShopClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.get());
        let actor = Self {
            receiver,
            service: ShoppingService::new(gateway),
        };
        (actor, ShopClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!("Shop actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(carts = self.service.carts_len(), "Shutdown");
    }

    fn handle(&mut self, msg: ShopRequest) {
        match msg {
            ShopRequest::AddToCart {
                customer,
                product,
                quantity,
                respond_to,
            } => {
                let cart = self.service.cart(&customer);
                cart.add(product, quantity);
                let _ = respond_to.send(Ok(cart.clone()));
            }
            ShopRequest::EditCart {
                customer,
                product,
                quantity,
                respond_to,
            } => {
                let cart = self.service.cart(&customer);
                cart.edit(product, quantity);
                let _ = respond_to.send(Ok(cart.clone()));
            }
            ShopRequest::ClearCart {
                customer,
                respond_to,
            } => {
                debug!(customer = %customer.id(), "ClearCart");
                self.service.cart(&customer).clear();
                let _ = respond_to.send(Ok(()));
            }
            ShopRequest::GetCart {
                customer,
                respond_to,
            } => {
                let cart = self.service.cart(&customer).clone();
                debug!(customer = %customer.id(), lines = cart.len(), "GetCart");
                let _ = respond_to.send(Ok(cart));
            }
            ShopRequest::Buy {
                customer,
                respond_to,
            } => {
                debug!(customer = %customer.id(), "Buy");
                let result = self.service.buy(&customer);
                match &result {
                    Ok(purchase) => info!(customer = %customer.id(), ?purchase, "Buy ok"),
                    Err(e) => warn!(customer = %customer.id(), error = %e, "Buy failed"),
                }
                let _ = respond_to.send(result);
            }
            ShopRequest::GetAllProducts { respond_to } => {
                let result = self.service.all_products();
                debug!(ok = result.is_ok(), "GetAllProducts");
                let _ = respond_to.send(result);
            }
            ShopRequest::GetProductByName { name, respond_to } => {
                let result = self.service.product_by_name(&name);
                debug!(product = %name, ok = result.is_ok(), "GetProductByName");
                let _ = respond_to.send(result);
            }
        }
    }
}
