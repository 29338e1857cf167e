//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown, and the number of carts at shutdown
//! - **Cart Operations**: add / edit / clear with customer, product and quantity fields
//! - **Purchases**: committed purchases at `info`, rejected ones at `warn` with the reason
//! - **Gateway Traffic**: reads and saves at `debug`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Purchases and lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Every cart change and gateway call
//! RUST_LOG=debug cargo run
//!
//! # Only the purchase pipeline
//! RUST_LOG=shopping_service::service=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Shop system started channel_capacity=32
//! INFO Shop actor started
//! INFO Cart created customer=customer_1
//! INFO Purchase committed customer=customer_1 saved=1
//! INFO Buy ok customer=customer_1 purchase=Committed { saved: 1 }
//! WARN Purchase rejected customer=customer_2 error=В наличии нет необходимого количества товара 'bread'
//! ```

/// Initializes the tracing/logging infrastructure for the application.
///
/// Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
