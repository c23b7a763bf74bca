use crate::domain::Product;

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Sets the inventory count directly (not a delta) and bumps the update
    /// timestamp.
    SetInventory(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Result from SetInventory - the updated record.
    SetInventory(Product),
}
