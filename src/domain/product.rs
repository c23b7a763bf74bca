use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    #[serde(rename = "Home & Kitchen")]
    HomeKitchen,
    Beauty,
    #[serde(rename = "Toys & Games")]
    ToysGames,
    #[serde(rename = "Sports & Outdoors")]
    SportsOutdoors,
    Books,
    Health,
    Automotive,
    Grocery,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Electronics,
        Category::Clothing,
        Category::HomeKitchen,
        Category::Beauty,
        Category::ToysGames,
        Category::SportsOutdoors,
        Category::Books,
        Category::Health,
        Category::Automotive,
        Category::Grocery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::HomeKitchen => "Home & Kitchen",
            Category::Beauty => "Beauty",
            Category::ToysGames => "Toys & Games",
            Category::SportsOutdoors => "Sports & Outdoors",
            Category::Books => "Books",
            Category::Health => "Health",
            Category::Automotive => "Automotive",
            Category::Grocery => "Grocery",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A catalog entry with price, category, and inventory count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub inventory: u32,
    pub alert_threshold: u32,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// A product is low stock at or below its alert threshold (inclusive).
    pub fn is_low_stock(&self) -> bool {
        self.inventory <= self.alert_threshold
    }
}

/// Payload for creating a new product. The id and timestamps are assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub inventory: u32,
    pub alert_threshold: u32,
    pub image: String,
}

/// Partial update for an existing product. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub inventory: Option<u32>,
    pub alert_threshold: Option<u32>,
    pub image: Option<String>,
}
