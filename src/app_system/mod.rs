//! System orchestration, startup, and shutdown logic.

pub mod dashboard_system;
pub mod tracing;

pub use dashboard_system::*;
pub use tracing::*;
