//! Order-specific domain logic, including lifecycle actions.

mod actions;
mod entity;
mod error;

pub use actions::*;
pub use error::*;
