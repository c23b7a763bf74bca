use std::collections::HashMap;

use crate::domain::{round2, Category, Product};

/// Products at or below their alert threshold, in collection order.
pub fn low_stock(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.is_low_stock())
        .cloned()
        .collect()
}

/// Inventory valuation (price x inventory) for every fixed category, rounded
/// to 2 decimals. Categories with no products map to 0.
pub fn inventory_value_by_category(products: &[Product]) -> HashMap<String, f64> {
    Category::ALL
        .iter()
        .map(|category| {
            let value = products
                .iter()
                .filter(|product| product.category == *category)
                .map(|product| product.price * f64::from(product.inventory))
                .sum::<f64>();
            (category.label().to_string(), round2(value))
        })
        .collect()
}

/// Total inventory valuation across all products, rounded to 2 decimals.
pub fn total_inventory_value(products: &[Product]) -> f64 {
    round2(
        products
            .iter()
            .map(|product| product.price * f64::from(product.inventory))
            .sum(),
    )
}

/// Number of catalog entries.
pub fn total_products(products: &[Product]) -> usize {
    products.len()
}

/// Sum of inventory counts across all products.
pub fn total_inventory_units(products: &[Product]) -> u64 {
    products
        .iter()
        .map(|product| u64::from(product.inventory))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(name: &str, price: f64, category: Category, inventory: u32, threshold: u32) -> Product {
        let now = Utc::now();
        Product {
            id: format!("prod-{}", name),
            name: name.to_string(),
            description: String::new(),
            price,
            category,
            inventory,
            alert_threshold: threshold,
            image: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn low_stock_is_inclusive_and_keeps_collection_order() {
        let products = vec![
            product("at-threshold", 10.0, Category::Beauty, 5, 5),
            product("well-stocked", 10.0, Category::Beauty, 50, 5),
            product("below", 10.0, Category::Electronics, 1, 5),
        ];

        let low = low_stock(&products);
        let names: Vec<&str> = low.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["at-threshold", "below"]);
    }

    #[test]
    fn valuation_by_category_covers_every_fixed_category() {
        let products = vec![
            product("serum", 10.0, Category::Beauty, 5, 2),
            product("earbuds", 20.0, Category::Electronics, 2, 5),
        ];

        let by_category = inventory_value_by_category(&products);
        assert_eq!(by_category.len(), Category::ALL.len());
        assert_eq!(by_category.get("Beauty"), Some(&50.0));
        assert_eq!(by_category.get("Electronics"), Some(&40.0));
        assert_eq!(by_category.get("Books"), Some(&0.0));
        assert_eq!(by_category.get("Grocery"), Some(&0.0));

        assert_eq!(total_inventory_value(&products), 90.0);
    }

    #[test]
    fn simple_aggregates() {
        let products = vec![
            product("a", 1.0, Category::Books, 3, 1),
            product("b", 2.0, Category::Books, 7, 1),
        ];

        assert_eq!(total_products(&products), 2);
        assert_eq!(total_inventory_units(&products), 10);
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        assert_eq!(total_inventory_value(&[]), 0.0);
        assert_eq!(total_inventory_units(&[]), 0);
        assert!(low_stock(&[]).is_empty());
        let by_category = inventory_value_by_category(&[]);
        assert!(by_category.values().all(|value| *value == 0.0));
    }
}
