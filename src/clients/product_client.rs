use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info, instrument};

use super::SEED_LATENCY;
use crate::actor_framework::ResourceClient;
use crate::analytics::inventory as views;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::seed;

/// Client for the product store: catalog CRUD, inventory actions, and the
/// derived valuation/alert views.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    /// Seeds the catalog after a simulated network delay, replacing the whole
    /// collection atomically (last write wins).
    #[instrument(skip(self))]
    pub async fn load_products(&self) -> Result<usize, ProductError> {
        debug!("Seeding product catalog");
        let products = seed::mock_products(Utc::now());
        tokio::time::sleep(SEED_LATENCY).await;
        let count = self.inner.replace(products).await?;
        info!(count, "Product catalog loaded");
        Ok(count)
    }

    /// Latency-free atomic replacement, used by tests and embedders that
    /// bring their own data.
    #[instrument(skip(self, products))]
    pub async fn replace_products(&self, products: Vec<Product>) -> Result<usize, ProductError> {
        debug!("Sending request");
        self.inner
            .replace(products)
            .await
            .map_err(ProductError::from)
    }

    /// Creates a product with a fresh id and both timestamps set to now, and
    /// returns the created record.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn add_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }

    /// Merges the patch into the matching record. `None` means no record has
    /// that id; the collection is left untouched in that case.
    #[instrument(skip(self, patch))]
    pub async fn update_product(
        &self,
        id: String,
        patch: ProductPatch,
    ) -> Result<Option<Product>, ProductError> {
        debug!("Sending request");
        self.inner
            .update(id, patch)
            .await
            .map_err(ProductError::from)
    }

    /// Sets the inventory count directly (not a delta). `None` means no
    /// record has that id.
    #[instrument(skip(self))]
    pub async fn set_inventory(
        &self,
        id: String,
        quantity: u32,
    ) -> Result<Option<Product>, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::SetInventory(quantity))
            .await
        {
            Ok(Some(ProductActionResult::SetInventory(product))) => Ok(Some(product)),
            Ok(None) => Ok(None),
            Err(err) => Err(ProductError::from(err)),
        }
    }

    // --- Derived reporting views ---

    /// Products at or below their alert threshold, in collection order.
    #[instrument(skip(self))]
    pub async fn low_stock_products(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.inner.list().await?;
        Ok(views::low_stock(&products))
    }

    /// price x inventory per fixed category, 0 for empty categories.
    #[instrument(skip(self))]
    pub async fn inventory_value_by_category(
        &self,
    ) -> Result<HashMap<String, f64>, ProductError> {
        let products = self.inner.list().await?;
        Ok(views::inventory_value_by_category(&products))
    }

    #[instrument(skip(self))]
    pub async fn total_inventory_value(&self) -> Result<f64, ProductError> {
        let products = self.inner.list().await?;
        Ok(views::total_inventory_value(&products))
    }

    #[instrument(skip(self))]
    pub async fn total_product_count(&self) -> Result<usize, ProductError> {
        let products = self.inner.list().await?;
        Ok(views::total_products(&products))
    }

    #[instrument(skip(self))]
    pub async fn total_inventory_units(&self) -> Result<u64, ProductError> {
        let products = self.inner.list().await?;
        Ok(views::total_inventory_units(&products))
    }
}
