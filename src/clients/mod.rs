//! Per-entity client facades over the generic resource actors.

#[macro_use]
mod macros;

mod order_client;
mod product_client;

pub use order_client::OrderClient;
pub use product_client::ProductClient;

use std::time::Duration;

/// Simulated network latency applied by the seed-load operations.
pub(crate) const SEED_LATENCY: Duration = Duration::from_millis(800);
