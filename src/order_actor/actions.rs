use crate::domain::OrderStatus;

/// Custom actions for Order entities.
///
/// The lifecycle is strictly forward-moving; each action is valid from
/// exactly one predecessor state, except `Cancel`, which is terminal from any
/// non-delivered state.
#[derive(Debug, Clone)]
pub enum OrderAction {
    MarkProcessing,
    MarkShipped,
    MarkDelivered,
    Cancel,
}

/// Results from OrderActions.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The status the order moved to.
    Status(OrderStatus),
}
