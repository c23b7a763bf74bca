use chrono::Utc;

use super::actions::{OrderAction, OrderActionResult};
use crate::actor_framework::Entity;
use crate::domain::{round2, Order, OrderCreate, OrderItem, OrderStatus};

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new pending order; the total is derived from the line items.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        if params.items.is_empty() {
            return Err("order must contain at least one line item".to_string());
        }
        for item in &params.items {
            if item.quantity == 0 {
                return Err(format!(
                    "line item quantity must be at least 1: {}",
                    item.product_name
                ));
            }
            if item.price < 0.0 {
                return Err(format!(
                    "line item price cannot be negative: {}",
                    item.product_name
                ));
            }
        }

        let total = round2(params.items.iter().map(OrderItem::subtotal).sum());
        Ok(Self {
            id,
            customer_id: params.customer_id,
            customer_name: params.customer_name,
            items: params.items,
            total,
            status: OrderStatus::Pending,
            shipping_address: params.shipping_address,
            order_date: Utc::now(),
            shipped_date: None,
            delivered_date: None,
        })
    }

    /// Orders are not field-patched; all mutation goes through actions.
    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    /// Moves the order along its lifecycle, stamping or clearing the ship and
    /// delivery timestamps so they are only present once the matching status
    /// has been reached.
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::MarkProcessing => {
                if self.status != OrderStatus::Pending {
                    return Err(format!("cannot move a {} order to processing", self.status));
                }
                self.status = OrderStatus::Processing;
            }
            OrderAction::MarkShipped => {
                if self.status != OrderStatus::Processing {
                    return Err(format!("cannot ship a {} order", self.status));
                }
                self.status = OrderStatus::Shipped;
                self.shipped_date = Some(Utc::now());
            }
            OrderAction::MarkDelivered => {
                if self.status != OrderStatus::Shipped {
                    return Err(format!("cannot deliver a {} order", self.status));
                }
                self.status = OrderStatus::Delivered;
                self.delivered_date = Some(Utc::now());
            }
            OrderAction::Cancel => {
                match self.status {
                    OrderStatus::Delivered => {
                        return Err("cannot cancel a delivered order".to_string())
                    }
                    OrderStatus::Cancelled => {
                        return Err("order is already cancelled".to_string())
                    }
                    _ => {}
                }
                self.status = OrderStatus::Cancelled;
                self.shipped_date = None;
                self.delivered_date = None;
            }
        }
        Ok(OrderActionResult::Status(self.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderItem;

    fn params(items: Vec<OrderItem>) -> OrderCreate {
        OrderCreate {
            customer_id: "cust-1".to_string(),
            customer_name: "Test Customer".to_string(),
            items,
            shipping_address: "123 Main St".to_string(),
        }
    }

    fn item(name: &str, quantity: u32, price: f64) -> OrderItem {
        OrderItem {
            product_id: "prod-1".to_string(),
            product_name: name.to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn creation_derives_rounded_total() {
        let order = Order::from_create_params(
            "ORD-1".to_string(),
            params(vec![item("Laptop", 2, 10.004), item("T-Shirt", 1, 5.0)]),
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, 25.01);
        assert!(order.shipped_date.is_none());
        assert!(order.delivered_date.is_none());
    }

    #[test]
    fn creation_rejects_invalid_items() {
        let empty = Order::from_create_params("ORD-1".to_string(), params(vec![]));
        assert!(empty.is_err());

        let zero_qty =
            Order::from_create_params("ORD-1".to_string(), params(vec![item("Laptop", 0, 10.0)]));
        assert!(zero_qty.is_err());

        let negative =
            Order::from_create_params("ORD-1".to_string(), params(vec![item("Laptop", 1, -1.0)]));
        assert!(negative.is_err());
    }

    #[test]
    fn lifecycle_moves_forward_and_stamps_dates() {
        let mut order =
            Order::from_create_params("ORD-1".to_string(), params(vec![item("Laptop", 1, 10.0)]))
                .unwrap();

        order.handle_action(OrderAction::MarkProcessing).unwrap();
        assert_eq!(order.status, OrderStatus::Processing);
        assert!(order.shipped_date.is_none());

        order.handle_action(OrderAction::MarkShipped).unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert!(order.shipped_date.is_some());

        order.handle_action(OrderAction::MarkDelivered).unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
        assert!(order.delivered_date.is_some());
    }

    #[test]
    fn lifecycle_rejects_skipped_states() {
        let mut order =
            Order::from_create_params("ORD-1".to_string(), params(vec![item("Laptop", 1, 10.0)]))
                .unwrap();

        assert!(order.handle_action(OrderAction::MarkShipped).is_err());
        assert!(order.handle_action(OrderAction::MarkDelivered).is_err());
    }

    #[test]
    fn cancel_is_terminal_and_clears_dates() {
        let mut order =
            Order::from_create_params("ORD-1".to_string(), params(vec![item("Laptop", 1, 10.0)]))
                .unwrap();
        order.handle_action(OrderAction::MarkProcessing).unwrap();
        order.handle_action(OrderAction::MarkShipped).unwrap();

        let result = order.handle_action(OrderAction::Cancel).unwrap();
        assert_eq!(result, OrderActionResult::Status(OrderStatus::Cancelled));
        assert!(order.shipped_date.is_none());
        assert!(order.delivered_date.is_none());

        assert!(order.handle_action(OrderAction::Cancel).is_err());
        assert!(order.handle_action(OrderAction::MarkProcessing).is_err());
    }

    #[test]
    fn cancel_rejected_after_delivery() {
        let mut order =
            Order::from_create_params("ORD-1".to_string(), params(vec![item("Laptop", 1, 10.0)]))
                .unwrap();
        order.handle_action(OrderAction::MarkProcessing).unwrap();
        order.handle_action(OrderAction::MarkShipped).unwrap();
        order.handle_action(OrderAction::MarkDelivered).unwrap();

        assert!(order.handle_action(OrderAction::Cancel).is_err());
    }
}
