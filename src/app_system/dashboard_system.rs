use tokio::sync::mpsc;
use tracing::{error, info};
use uuid::Uuid;

use crate::actor_framework::{Notification, ResourceActor};
use crate::clients::{OrderClient, ProductClient};
use crate::domain::{Order, Product};

/// The main application system that hosts both entity stores.
///
/// Responsible for starting the actors, wiring the shared notification
/// channel, and handling shutdown. The returned receiver carries a store
/// event for every mutation (the UI layer turns these into toasts).
pub struct DashboardSystem {
    pub order_client: OrderClient,
    pub product_client: ProductClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DashboardSystem {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        info!("Starting dashboard system");

        let (notify_tx, notify_rx) = mpsc::unbounded_channel();

        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(32, "order", || format!("ORD-{}", Uuid::new_v4()));
        let order_client = OrderClient::new(order_resource_client);
        let order_handle = tokio::spawn(order_actor.with_notifier(notify_tx.clone()).run());

        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(32, "product", || Uuid::new_v4().to_string());
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.with_notifier(notify_tx).run());

        let system = Self {
            order_client,
            product_client,
            handles: vec![order_handle, product_handle],
        };
        (system, notify_rx)
    }

    /// Gracefully shut down both stores: dropping the clients closes the
    /// request channels, and the actors drain and stop.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down dashboard system...");

        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Dashboard system shutdown complete.");
        Ok(())
    }
}
