//! # Shop Client
//!
//! Type-safe async API for the [`ShopActor`](super::ShopActor). The client only
//! holds a channel sender, so it is cheap to clone and share across tasks.
//!
//! Carts returned by the client are copies taken inside the actor; changes go
//! back through `add_to_cart` / `edit_cart` / `clear_cart`.

use super::error::ShopError;
use super::message::{Response, ShopRequest};
use crate::cart::Cart;
use crate::model::{Customer, Product};
use crate::service::Purchase;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ShopClient {
    sender: mpsc::Sender<ShopRequest>,
}

impl ShopClient {
    pub fn new(sender: mpsc::Sender<ShopRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> ShopRequest,
    ) -> Result<T, ShopError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ShopError::ActorClosed)?;
        let result = response.await.map_err(|_| ShopError::ActorDropped)?;
        Ok(result?)
    }

    #[instrument(skip(self))]
    pub async fn add_to_cart(
        &self,
        customer: Customer,
        product: Product,
        quantity: i64,
    ) -> Result<Cart, ShopError> {
        debug!("Sending request");
        self.request(|respond_to| ShopRequest::AddToCart {
            customer,
            product,
            quantity,
            respond_to,
        })
        .await
    }

    /// Sets a line's quantity; zero or less removes the line.
    #[instrument(skip(self))]
    pub async fn edit_cart(
        &self,
        customer: Customer,
        product: Product,
        quantity: i64,
    ) -> Result<Cart, ShopError> {
        debug!("Sending request");
        self.request(|respond_to| ShopRequest::EditCart {
            customer,
            product,
            quantity,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self, customer: Customer) -> Result<(), ShopError> {
        debug!("Sending request");
        self.request(|respond_to| ShopRequest::ClearCart {
            customer,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn cart(&self, customer: Customer) -> Result<Cart, ShopError> {
        debug!("Sending request");
        self.request(|respond_to| ShopRequest::GetCart {
            customer,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn buy(&self, customer: Customer) -> Result<Purchase, ShopError> {
        debug!("Sending request");
        self.request(|respond_to| ShopRequest::Buy {
            customer,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn all_products(&self) -> Result<Vec<Product>, ShopError> {
        debug!("Sending request");
        self.request(|respond_to| ShopRequest::GetAllProducts { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn product_by_name(&self, name: String) -> Result<Option<Product>, ShopError> {
        debug!("Sending request");
        self.request(|respond_to| ShopRequest::GetProductByName { name, respond_to })
            .await
    }
}
