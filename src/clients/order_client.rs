use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info, instrument};

use super::SEED_LATENCY;
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::analytics::orders as views;
use crate::analytics::{DailyBucket, MonthlyBucket};
use crate::domain::{Order, OrderCreate, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::seed;

/// Number of mock orders generated by `load_orders`.
pub const SEED_ORDER_COUNT: usize = 100;

/// Client for the order store: collection CRUD, lifecycle actions, and the
/// derived reporting views.
///
/// Every view fetches a fresh snapshot from the actor and recomputes, so a
/// view read after a mutation can never be stale.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(OrderClient, Order, OrderError, order);

impl OrderClient {
    /// Seeds the collection with mock orders after a simulated network delay,
    /// replacing whatever was there atomically (last write wins).
    #[instrument(skip(self))]
    pub async fn load_orders(&self) -> Result<usize, OrderError> {
        debug!("Seeding order collection");
        let orders = seed::mock_orders(SEED_ORDER_COUNT, Utc::now(), &mut rand::thread_rng());
        tokio::time::sleep(SEED_LATENCY).await;
        let count = self.inner.replace(orders).await?;
        info!(count, "Order collection loaded");
        Ok(count)
    }

    /// Latency-free atomic replacement, used by tests and embedders that
    /// bring their own data.
    #[instrument(skip(self, orders))]
    pub async fn replace_orders(&self, orders: Vec<Order>) -> Result<usize, OrderError> {
        debug!("Sending request");
        self.inner.replace(orders).await.map_err(OrderError::from)
    }

    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(OrderError::from)
    }

    // --- Lifecycle actions ---

    #[instrument(skip(self))]
    pub async fn mark_processing(&self, id: String) -> Result<Option<OrderStatus>, OrderError> {
        self.perform(id, OrderAction::MarkProcessing).await
    }

    #[instrument(skip(self))]
    pub async fn mark_shipped(&self, id: String) -> Result<Option<OrderStatus>, OrderError> {
        self.perform(id, OrderAction::MarkShipped).await
    }

    #[instrument(skip(self))]
    pub async fn mark_delivered(&self, id: String) -> Result<Option<OrderStatus>, OrderError> {
        self.perform(id, OrderAction::MarkDelivered).await
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: String) -> Result<Option<OrderStatus>, OrderError> {
        self.perform(id, OrderAction::Cancel).await
    }

    async fn perform(
        &self,
        id: String,
        action: OrderAction,
    ) -> Result<Option<OrderStatus>, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, action).await {
            Ok(Some(OrderActionResult::Status(status))) => Ok(Some(status)),
            Ok(None) => Ok(None),
            Err(FrameworkError::Rejected(reason)) => Err(OrderError::InvalidTransition(reason)),
            Err(other) => Err(OrderError::ActorCommunicationError(other.to_string())),
        }
    }

    // --- Derived reporting views ---

    /// Thirty daily buckets ending today, oldest first; cancelled orders are
    /// included in counts and revenue.
    #[instrument(skip(self))]
    pub async fn daily_series(&self) -> Result<Vec<DailyBucket>, OrderError> {
        let orders = self.inner.list().await?;
        Ok(views::daily_series(&orders, Utc::now().date_naive()))
    }

    /// Twelve monthly buckets ending with the current month, oldest first.
    #[instrument(skip(self))]
    pub async fn monthly_series(&self) -> Result<Vec<MonthlyBucket>, OrderError> {
        let orders = self.inner.list().await?;
        Ok(views::monthly_series(&orders, Utc::now().date_naive()))
    }

    /// Revenue across non-cancelled orders.
    #[instrument(skip(self))]
    pub async fn total_revenue(&self) -> Result<f64, OrderError> {
        let orders = self.inner.list().await?;
        Ok(views::total_revenue(&orders))
    }

    /// All orders, including cancelled ones.
    #[instrument(skip(self))]
    pub async fn total_order_count(&self) -> Result<usize, OrderError> {
        let orders = self.inner.list().await?;
        Ok(views::total_orders(&orders))
    }

    #[instrument(skip(self))]
    pub async fn completed_order_count(&self) -> Result<usize, OrderError> {
        let orders = self.inner.list().await?;
        Ok(views::completed_orders(&orders))
    }

    #[instrument(skip(self))]
    pub async fn in_progress_order_count(&self) -> Result<usize, OrderError> {
        let orders = self.inner.list().await?;
        Ok(views::orders_in_progress(&orders))
    }

    /// Line-item revenue of non-cancelled orders, keyed by report category.
    #[instrument(skip(self))]
    pub async fn revenue_by_category(&self) -> Result<HashMap<String, f64>, OrderError> {
        let orders = self.inner.list().await?;
        Ok(views::revenue_by_category(&orders))
    }

    #[instrument(skip(self))]
    pub async fn current_month_revenue(&self) -> Result<f64, OrderError> {
        let orders = self.inner.list().await?;
        Ok(views::current_month_revenue(&orders, Utc::now().date_naive()))
    }

    /// Mean non-cancelled order total; 0 when there are none.
    #[instrument(skip(self))]
    pub async fn average_order_value(&self) -> Result<f64, OrderError> {
        let orders = self.inner.list().await?;
        Ok(views::average_order_value(&orders))
    }
}
