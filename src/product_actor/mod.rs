//! Product-specific domain logic, including inventory actions.

mod actions;
mod entity;
mod error;

pub use actions::*;
pub use error::*;
