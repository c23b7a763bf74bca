//! Mock data generation for the seed-load operations.
//!
//! The dashboard has no real backend; both collections are populated with
//! randomly generated records spread over the recent past.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::domain::{round2, Category, Order, OrderItem, OrderStatus, Product};

const PRODUCT_NAMES: [&str; 12] = [
    "Wireless Headphones",
    "Smart Watch",
    "4K TV",
    "Laptop",
    "Phone Case",
    "T-Shirt",
    "Running Shoes",
    "Air Fryer",
    "Cookware Set",
    "Skincare Set",
    "Building Blocks",
    "Wireless Earbuds",
];

const CUSTOMER_NAMES: [&str; 10] = [
    "John Smith",
    "Emily Johnson",
    "Michael Williams",
    "Emma Brown",
    "James Jones",
    "Olivia Miller",
    "Robert Davis",
    "Sophia Garcia",
    "William Rodriguez",
    "Ava Martinez",
];

const SHIPPING_ADDRESSES: [&str; 5] = [
    "123 Main St, New York, NY 10001",
    "456 Oak Ave, Los Angeles, CA 90001",
    "789 Pine Rd, Chicago, IL 60007",
    "321 Cedar Ln, Houston, TX 77001",
    "654 Birch Blvd, Phoenix, AZ 85001",
];

/// How far back order dates are spread.
const ORDER_HISTORY_DAYS: i64 = 180;

/// Generates `count` mock orders spread over the trailing 180 days, newest
/// first. Status follows order age; roughly 5% are cancelled with their
/// ship/delivery timestamps cleared.
pub fn mock_orders(count: usize, now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<Order> {
    let mut orders: Vec<Order> = (0..count)
        .map(|index| {
            let days_back = rng.gen_range(0..ORDER_HISTORY_DAYS);
            let order_date = now - Duration::days(days_back);

            let items: Vec<OrderItem> = (0..rng.gen_range(1..=5))
                .map(|_| OrderItem {
                    product_id: format!("prod-{}", rng.gen_range(0..1000)),
                    product_name: PRODUCT_NAMES[rng.gen_range(0..PRODUCT_NAMES.len())]
                        .to_string(),
                    quantity: rng.gen_range(1..=3),
                    price: round2(rng.gen_range(10.0..210.0)),
                })
                .collect();
            let total = round2(items.iter().map(OrderItem::subtotal).sum());

            let (status, shipped_date, delivered_date) = if rng.gen_bool(0.05) {
                (OrderStatus::Cancelled, None, None)
            } else if days_back > 7 {
                (
                    OrderStatus::Delivered,
                    Some(now - Duration::days(days_back - 2)),
                    Some(now - Duration::days(days_back - 7)),
                )
            } else if days_back > 3 {
                (
                    OrderStatus::Shipped,
                    Some(now - Duration::days(days_back - 2)),
                    None,
                )
            } else if days_back > 1 {
                (OrderStatus::Processing, None, None)
            } else {
                (OrderStatus::Pending, None, None)
            };

            Order {
                id: format!("ORD-{}", 1000 + index),
                customer_id: format!("cust-{}", rng.gen_range(0..500)),
                customer_name: CUSTOMER_NAMES[rng.gen_range(0..CUSTOMER_NAMES.len())].to_string(),
                items,
                total,
                status,
                shipping_address: SHIPPING_ADDRESSES[rng.gen_range(0..SHIPPING_ADDRESSES.len())]
                    .to_string(),
                order_date,
                shipped_date,
                delivered_date,
            }
        })
        .collect();

    orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    orders
}

/// The fixed catalog, including two deliberately low-stock rows so the alert
/// views have something to show.
pub fn mock_products(now: DateTime<Utc>) -> Vec<Product> {
    let product = |name: &str,
                   description: &str,
                   price: f64,
                   category: Category,
                   inventory: u32,
                   alert_threshold: u32,
                   image: &str| Product {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        inventory,
        alert_threshold,
        image: image.to_string(),
        created_at: now,
        updated_at: now,
    };

    vec![
        product(
            "Wireless Bluetooth Headphones",
            "Premium wireless headphones with noise cancellation",
            129.99,
            Category::Electronics,
            45,
            10,
            "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg",
        ),
        product(
            "Smart Watch Series 5",
            "Track your health metrics and stay connected",
            199.99,
            Category::Electronics,
            28,
            5,
            "https://images.pexels.com/photos/437037/pexels-photo-437037.jpeg",
        ),
        product(
            "4K Ultra HD Smart TV 55\"",
            "Crisp 4K resolution with smart features",
            499.99,
            Category::Electronics,
            12,
            3,
            "https://images.pexels.com/photos/333984/pexels-photo-333984.jpeg",
        ),
        product(
            "Men's Casual Cotton T-Shirt",
            "Comfortable cotton t-shirt for everyday wear",
            19.99,
            Category::Clothing,
            150,
            30,
            "https://images.pexels.com/photos/1656684/pexels-photo-1656684.jpeg",
        ),
        product(
            "Women's Running Shoes",
            "Lightweight and breathable running shoes",
            89.99,
            Category::Clothing,
            65,
            15,
            "https://images.pexels.com/photos/2529148/pexels-photo-2529148.jpeg",
        ),
        product(
            "Air Fryer 5.5L",
            "Healthy cooking with 80% less oil",
            79.99,
            Category::HomeKitchen,
            32,
            8,
            "https://images.pexels.com/photos/6605309/pexels-photo-6605309.jpeg",
        ),
        product(
            "Non-Stick Cookware Set",
            "10-piece set with premium non-stick coating",
            149.99,
            Category::HomeKitchen,
            18,
            5,
            "https://images.pexels.com/photos/4252139/pexels-photo-4252139.jpeg",
        ),
        product(
            "Premium Skincare Set",
            "Complete skincare routine for glowing skin",
            59.99,
            Category::Beauty,
            42,
            10,
            "https://images.pexels.com/photos/4041391/pexels-photo-4041391.jpeg",
        ),
        product(
            "Building Blocks Set",
            "500-piece creative building blocks",
            29.99,
            Category::ToysGames,
            55,
            15,
            "https://images.pexels.com/photos/163036/mario-luigi-yoschi-figures-163036.jpeg",
        ),
        product(
            "Wireless Earbuds",
            "True wireless earbuds with charging case",
            49.99,
            Category::Electronics,
            2,
            5,
            "https://images.pexels.com/photos/3780681/pexels-photo-3780681.jpeg",
        ),
        product(
            "Organic Facial Cleanser",
            "All-natural facial cleanser for sensitive skin",
            22.99,
            Category::Beauty,
            4,
            10,
            "https://images.pexels.com/photos/6621462/pexels-photo-6621462.jpeg",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn orders_respect_lifecycle_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = Utc::now();
        let orders = mock_orders(200, now, &mut rng);
        assert_eq!(orders.len(), 200);

        for order in &orders {
            assert!(order.order_date <= now);
            assert!(order.order_date >= now - Duration::days(ORDER_HISTORY_DAYS));
            assert!(!order.items.is_empty() && order.items.len() <= 5);

            let expected = round2(order.items.iter().map(OrderItem::subtotal).sum());
            assert_eq!(order.total, expected);

            match order.status {
                OrderStatus::Pending | OrderStatus::Processing | OrderStatus::Cancelled => {
                    assert!(order.shipped_date.is_none());
                    assert!(order.delivered_date.is_none());
                }
                OrderStatus::Shipped => {
                    assert!(order.shipped_date.is_some());
                    assert!(order.delivered_date.is_none());
                }
                OrderStatus::Delivered => {
                    assert!(order.shipped_date.is_some());
                    assert!(order.delivered_date.is_some());
                }
            }
        }

        // Sorted newest first.
        assert!(orders
            .windows(2)
            .all(|pair| pair[0].order_date >= pair[1].order_date));
    }

    #[test]
    fn catalog_has_unique_ids_and_low_stock_rows() {
        let products = mock_products(Utc::now());
        assert_eq!(products.len(), 11);

        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());

        let low: Vec<&str> = products
            .iter()
            .filter(|p| p.is_low_stock())
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(low, vec!["Wireless Earbuds", "Organic Facial Cleanser"]);
    }
}
