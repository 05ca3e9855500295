//! Revenue analytics
//!
//! Buckets timestamped monetary records into calendar periods and derives
//! the revenue view's summary figures and top-product table. The revenue
//! collection holds terminal-success orders only; [`realized`] produces it
//! from a raw fetch.

use std::collections::BTreeMap;
use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::models::Order;

/// Keep only orders counted as realized revenue.
pub fn realized(orders: &[Order]) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| o.status.is_terminal_success())
        .cloned()
        .collect()
}

/// Calendar period granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Monthly,
    Yearly,
}

impl Granularity {
    /// ISO-derived bucket key; lexicographic order preserves date order for
    /// all three granularities.
    pub fn bucket_key(self, ts: DateTime<Utc>) -> String {
        match self {
            Granularity::Daily => ts.format("%Y-%m-%d").to_string(),
            Granularity::Monthly => ts.format("%Y-%m").to_string(),
            Granularity::Yearly => ts.format("%Y").to_string(),
        }
    }
}

/// Range and threshold applied before bucketing
#[derive(Debug, Clone)]
pub struct RevenueParams {
    /// Inclusive calendar-day range
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Orders below this amount are excluded
    pub min_amount: f64,
}

impl RevenueParams {
    fn includes(&self, order: &Order) -> bool {
        let day = order.created_at.date_naive();
        day >= self.start && day <= self.end && order.total_amount >= self.min_amount
    }
}

/// One period of the revenue series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodBucket {
    pub period: String,
    pub revenue: f64,
    pub orders: u32,
    /// Revenue per order within the period
    pub average: f64,
}

/// Bucket orders into calendar periods, ordered by period key ascending.
///
/// Sum, count, and average are derived in the same pass; out-of-range and
/// below-threshold records never reach a bucket.
pub fn bucket(orders: &[Order], granularity: Granularity, params: &RevenueParams) -> Vec<PeriodBucket> {
    let mut buckets: BTreeMap<String, (f64, u32)> = BTreeMap::new();

    for order in orders.iter().filter(|o| params.includes(o)) {
        let key = granularity.bucket_key(order.created_at);
        let entry = buckets.entry(key).or_insert((0.0, 0));
        entry.0 += order.total_amount;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(period, (revenue, orders))| PeriodBucket {
            period,
            revenue,
            orders,
            average: if orders > 0 { revenue / orders as f64 } else { 0.0 },
        })
        .collect()
}

/// Number of rows in the top-products table.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// One row of the top-products table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRevenue {
    pub name: String,
    pub units: i64,
    pub revenue: f64,
    /// Share of total revenue, in percent (0 when total is 0)
    pub contribution: f64,
}

/// Group order items by product, rank by revenue, keep the top 10.
pub fn top_products(orders: &[Order]) -> Vec<ProductRevenue> {
    let mut by_product: HashMap<String, (f64, i64)> = HashMap::new();
    let mut seen_order: Vec<String> = Vec::new();

    for item in orders.iter().flat_map(|o| o.items.iter()) {
        if !by_product.contains_key(&item.product_name) {
            seen_order.push(item.product_name.clone());
        }
        let entry = by_product.entry(item.product_name.clone()).or_insert((0.0, 0));
        entry.0 += item.line_total();
        entry.1 += item.quantity;
    }

    let total: f64 = by_product.values().map(|(revenue, _)| revenue).sum();

    let mut ranked: Vec<ProductRevenue> = seen_order
        .into_iter()
        .filter_map(|name| {
            by_product.remove(&name).map(|(revenue, units)| ProductRevenue {
                name,
                units,
                revenue,
                contribution: if total > 0.0 { revenue / total * 100.0 } else { 0.0 },
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    ranked.truncate(TOP_PRODUCTS_LIMIT);
    ranked
}

/// Headline figures for the revenue view
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RevenueSummary {
    pub total: f64,
    pub today: f64,
    pub this_month: f64,
    pub average_order_value: f64,
}

/// Compute the headline figures against an explicit `today`.
pub fn summary(orders: &[Order], today: NaiveDate) -> RevenueSummary {
    let month_start = today.with_day(1).unwrap_or(today);

    let total: f64 = orders.iter().map(|o| o.total_amount).sum();
    let today_revenue: f64 = orders
        .iter()
        .filter(|o| o.created_at.date_naive() >= today)
        .map(|o| o.total_amount)
        .sum();
    let month_revenue: f64 = orders
        .iter()
        .filter(|o| o.created_at.date_naive() >= month_start)
        .map(|o| o.total_amount)
        .sum();

    RevenueSummary {
        total,
        today: today_revenue,
        this_month: month_revenue,
        average_order_value: if orders.is_empty() {
            0.0
        } else {
            total / orders.len() as f64
        },
    }
}
