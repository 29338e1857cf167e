//! Pure data structures for the shop: who buys ([`Customer`]) and what is sold ([`Product`]).

pub mod customer;
pub mod error;
pub mod product;

pub use customer::*;
pub use error::*;
pub use product::*;
