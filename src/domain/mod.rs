pub mod order;
pub mod product;

pub use order::*;
pub use product::*;

/// Round a money value to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
