mod domain;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod analytics;
mod order_actor;
mod product_actor;
mod seed;

use tracing::{info, warn, Instrument};

use crate::app_system::{setup_tracing, DashboardSystem};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront analytics dashboard");

    // Create the entire dashboard system (starts both stores)
    let (system, mut notifications) = DashboardSystem::new();

    // Surface store events the way the UI layer would (toasts become log lines)
    let notify_task = tokio::spawn(async move {
        while let Some(note) = notifications.recv().await {
            info!(entity = note.entity, event = ?note.event, "Store event");
        }
    });

    let span = tracing::info_span!("seed_data");
    async {
        info!("Loading mock data");
        let orders = system
            .order_client
            .load_orders()
            .await
            .map_err(|e| e.to_string())?;
        let products = system
            .product_client
            .load_products()
            .await
            .map_err(|e| e.to_string())?;
        info!(orders, products, "Mock data loaded");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Order reporting
    let span = tracing::info_span!("order_reports");
    async {
        let revenue = system
            .order_client
            .total_revenue()
            .await
            .map_err(|e| e.to_string())?;
        let orders = system
            .order_client
            .total_order_count()
            .await
            .map_err(|e| e.to_string())?;
        let average = system
            .order_client
            .average_order_value()
            .await
            .map_err(|e| e.to_string())?;
        info!(revenue, orders, average, "Sales summary");

        let monthly = system
            .order_client
            .monthly_series()
            .await
            .map_err(|e| e.to_string())?;
        if let Some(current) = monthly.last() {
            info!(
                month = %current.month,
                orders = current.orders,
                revenue = current.revenue,
                "Current month"
            );
        }

        let by_category = system
            .order_client
            .revenue_by_category()
            .await
            .map_err(|e| e.to_string())?;
        for (category, revenue) in &by_category {
            info!(category = %category, revenue, "Category revenue");
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Inventory reporting plus a restock of the first alerting product
    let span = tracing::info_span!("inventory_reports");
    async {
        let low_stock = system
            .product_client
            .low_stock_products()
            .await
            .map_err(|e| e.to_string())?;
        for product in &low_stock {
            warn!(
                name = %product.name,
                inventory = product.inventory,
                threshold = product.alert_threshold,
                "Low stock alert"
            );
        }

        if let Some(product) = low_stock.first() {
            let restocked = system
                .product_client
                .set_inventory(product.id.clone(), product.alert_threshold * 5)
                .await
                .map_err(|e| e.to_string())?;
            if let Some(restocked) = restocked {
                info!(name = %restocked.name, inventory = restocked.inventory, "Restocked");
            }
        }

        let value = system
            .product_client
            .total_inventory_value()
            .await
            .map_err(|e| e.to_string())?;
        info!(value, "Total inventory value");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Shutdown system gracefully
    system.shutdown().await?;
    notify_task.await.map_err(|e| e.to_string())?;

    info!("Dashboard run completed");
    Ok(())
}
