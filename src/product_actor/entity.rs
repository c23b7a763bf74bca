use chrono::Utc;

use super::actions::{ProductAction, ProductActionResult};
use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductPatch};

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new product with both timestamps set to now.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        if params.price < 0.0 {
            return Err("product price cannot be negative".to_string());
        }
        let now = Utc::now();
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            inventory: params.inventory,
            alert_threshold: params.alert_threshold,
            image: params.image,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merges the provided fields and bumps the update timestamp.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(price) = patch.price {
            if price < 0.0 {
                return Err("product price cannot be negative".to_string());
            }
            self.price = price;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(inventory) = patch.inventory {
            self.inventory = inventory;
        }
        if let Some(alert_threshold) = patch.alert_threshold {
            self.alert_threshold = alert_threshold;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::SetInventory(quantity) => {
                self.inventory = quantity;
                self.updated_at = Utc::now();
                Ok(ProductActionResult::SetInventory(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn params() -> ProductCreate {
        ProductCreate {
            name: "Wireless Earbuds".to_string(),
            description: "True wireless earbuds with charging case".to_string(),
            price: 49.99,
            category: Category::Electronics,
            inventory: 20,
            alert_threshold: 5,
            image: "https://example.com/earbuds.jpg".to_string(),
        }
    }

    #[test]
    fn creation_stamps_both_timestamps() {
        let product = Product::from_create_params("p1".to_string(), params()).unwrap();
        assert_eq!(product.created_at, product.updated_at);
        assert!(!product.is_low_stock());
    }

    #[test]
    fn creation_rejects_negative_price() {
        let mut bad = params();
        bad.price = -1.0;
        assert!(Product::from_create_params("p1".to_string(), bad).is_err());
    }

    #[test]
    fn update_merges_fields_and_bumps_timestamp() {
        let mut product = Product::from_create_params("p1".to_string(), params()).unwrap();
        let created_at = product.created_at;

        product
            .on_update(ProductPatch {
                price: Some(59.99),
                inventory: Some(3),
                ..ProductPatch::default()
            })
            .unwrap();

        assert_eq!(product.price, 59.99);
        assert_eq!(product.inventory, 3);
        assert_eq!(product.name, "Wireless Earbuds");
        assert_eq!(product.created_at, created_at);
        assert!(product.updated_at >= created_at);
        assert!(product.is_low_stock());
    }

    #[test]
    fn set_inventory_returns_updated_record() {
        let mut product = Product::from_create_params("p1".to_string(), params()).unwrap();

        let result = product
            .handle_action(ProductAction::SetInventory(2))
            .unwrap();
        let ProductActionResult::SetInventory(updated) = result;
        assert_eq!(updated.inventory, 2);
        assert!(updated.is_low_stock());
    }

    #[test]
    fn low_stock_boundary_is_inclusive() {
        let mut product = Product::from_create_params("p1".to_string(), params()).unwrap();
        product.inventory = product.alert_threshold;
        assert!(product.is_low_stock());
        product.inventory = product.alert_threshold + 1;
        assert!(!product.is_low_stock());
    }
}
