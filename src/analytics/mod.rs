//! Derived reporting views over the entity collections.
//!
//! Everything here is a pure function of a collection snapshot (plus an
//! explicit `today` where calendar bucketing is involved), so views can never
//! serve stale data: the clients recompute them on every access.

pub mod inventory;
pub mod orders;

pub use inventory::*;
pub use orders::*;
