//! # Shop Messages
//!
//! Requests sent from [`ShopClient`](super::ShopClient) to [`ShopActor`](super::ShopActor).
//! There is one variant per service operation; each carries a oneshot sender the
//! actor answers on.

use crate::cart::Cart;
use crate::model::{Customer, Product};
use crate::service::{Purchase, ShoppingError};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, ShoppingError>>;

#[derive(Debug)]
pub enum ShopRequest {
    AddToCart {
        customer: Customer,
        product: Product,
        quantity: i64,
        respond_to: Response<Cart>,
    },
    EditCart {
        customer: Customer,
        product: Product,
        quantity: i64,
        respond_to: Response<Cart>,
    },
    ClearCart {
        customer: Customer,
        respond_to: Response<()>,
    },
    GetCart {
        customer: Customer,
        respond_to: Response<Cart>,
    },
    Buy {
        customer: Customer,
        respond_to: Response<Purchase>,
    },
    GetAllProducts {
        respond_to: Response<Vec<Product>>,
    },
    GetProductByName {
        name: String,
        respond_to: Response<Option<Product>>,
    },
}
