use std::collections::HashMap;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

use crate::domain::{round2, Category, Order, OrderStatus};

/// Number of calendar days covered by the daily series, ending today.
pub const DAILY_WINDOW: i64 = 30;
/// Number of calendar months covered by the monthly series, ending with the
/// current month.
pub const MONTHLY_WINDOW: u32 = 12;

/// One calendar day of order activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub orders: usize,
    pub revenue: f64,
}

/// One calendar month of order activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    pub month: String,
    pub orders: usize,
    pub revenue: f64,
}

/// Order counts and revenue for the last 30 calendar days, oldest first.
///
/// Cancelled orders are counted here on purpose: the time series report raw
/// order activity, unlike [`total_revenue`].
pub fn daily_series(orders: &[Order], today: NaiveDate) -> Vec<DailyBucket> {
    (0..DAILY_WINDOW)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            let (count, revenue) = orders
                .iter()
                .filter(|order| order.order_date.date_naive() == date)
                .fold((0usize, 0.0f64), |(count, revenue), order| {
                    (count + 1, revenue + order.total)
                });
            DailyBucket {
                date,
                orders: count,
                revenue: round2(revenue),
            }
        })
        .collect()
}

/// Order counts and revenue for the last 12 calendar months, oldest first.
/// Cancelled orders are included, matching [`daily_series`].
pub fn monthly_series(orders: &[Order], today: NaiveDate) -> Vec<MonthlyBucket> {
    let anchor = today.with_day(1).unwrap_or(today);
    (0..MONTHLY_WINDOW)
        .rev()
        .map(|back| {
            let month_start = anchor.checked_sub_months(Months::new(back)).unwrap_or(anchor);
            let (count, revenue) = orders
                .iter()
                .filter(|order| {
                    let date = order.order_date.date_naive();
                    date.year() == month_start.year() && date.month() == month_start.month()
                })
                .fold((0usize, 0.0f64), |(count, revenue), order| {
                    (count + 1, revenue + order.total)
                });
            MonthlyBucket {
                month: month_start.format("%b %Y").to_string(),
                orders: count,
                revenue: round2(revenue),
            }
        })
        .collect()
}

/// Sum of order totals excluding cancelled orders, rounded to 2 decimals.
pub fn total_revenue(orders: &[Order]) -> f64 {
    round2(
        orders
            .iter()
            .filter(|order| !order.status.is_cancelled())
            .map(|order| order.total)
            .sum(),
    )
}

/// Count of all orders, including cancelled ones.
pub fn total_orders(orders: &[Order]) -> usize {
    orders.len()
}

/// Count of delivered orders.
pub fn completed_orders(orders: &[Order]) -> usize {
    orders
        .iter()
        .filter(|order| order.status == OrderStatus::Delivered)
        .count()
}

/// Count of pending, processing, and shipped orders.
pub fn orders_in_progress(orders: &[Order]) -> usize {
    orders
        .iter()
        .filter(|order| order.status.is_in_progress())
        .count()
}

/// Classifies a line item into a report category by product-name keywords.
///
/// Rules are applied in priority order; `None` means "Other". The seed data
/// makes them mutually exclusive, but the order still matters for arbitrary
/// names.
pub fn classify_product_name(name: &str) -> Option<Category> {
    let contains_any = |keywords: &[&str]| keywords.iter().any(|keyword| name.contains(keyword));

    if contains_any(&["Headphones", "TV", "Laptop", "Watch", "Earbuds"]) {
        Some(Category::Electronics)
    } else if contains_any(&["T-Shirt", "Shoes"]) {
        Some(Category::Clothing)
    } else if contains_any(&["Air Fryer", "Cookware"]) {
        Some(Category::HomeKitchen)
    } else if name.contains("Skincare") {
        Some(Category::Beauty)
    } else if name.contains("Building Blocks") {
        Some(Category::ToysGames)
    } else {
        None
    }
}

/// Revenue per report category over the line items of non-cancelled orders,
/// rounded to 2 decimals per category. Unmatched names land in "Other".
pub fn revenue_by_category(orders: &[Order]) -> HashMap<String, f64> {
    let mut result: HashMap<String, f64> = HashMap::new();

    for order in orders.iter().filter(|order| !order.status.is_cancelled()) {
        for item in &order.items {
            let label = classify_product_name(&item.product_name).map_or("Other", Category::label);
            *result.entry(label.to_string()).or_insert(0.0) += item.subtotal();
        }
    }

    for value in result.values_mut() {
        *value = round2(*value);
    }
    result
}

/// Revenue from non-cancelled orders placed in the current calendar month.
pub fn current_month_revenue(orders: &[Order], today: NaiveDate) -> f64 {
    round2(
        orders
            .iter()
            .filter(|order| !order.status.is_cancelled())
            .filter(|order| {
                let date = order.order_date.date_naive();
                date.year() == today.year() && date.month() == today.month()
            })
            .map(|order| order.total)
            .sum(),
    )
}

/// Mean total of non-cancelled orders; 0 when there are none.
pub fn average_order_value(orders: &[Order]) -> f64 {
    let (count, total) = orders
        .iter()
        .filter(|order| !order.status.is_cancelled())
        .fold((0usize, 0.0f64), |(count, total), order| {
            (count + 1, total + order.total)
        });

    if count == 0 {
        0.0
    } else {
        round2(total / count as f64)
    }
}
