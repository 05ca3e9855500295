//! Dashboard view
//!
//! One joined load across the backend collections. Secondary fetches fail
//! soft: a broken endpoint is logged and replaced by an empty default so the
//! remaining tiles still render.

use reef_client::{ClientResult, HttpClient};
use shared::models::Order;

use super::orders;

/// Orders shown in the recent-activity feed.
const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Aggregated dashboard tile values
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub products: usize,
    pub orders: usize,
    pub users: usize,
    /// Realized revenue over terminal-success orders
    pub revenue: f64,
    pub pending_role_requests: usize,
    /// Most recent orders, newest first
    pub recent_activity: Vec<Order>,
}

fn fallback<T: Default>(result: ClientResult<T>, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, collection = what, "Dashboard load failed, using empty default");
            T::default()
        }
    }
}

/// Load every dashboard collection concurrently and aggregate.
///
/// The five fetches are dispatched together and joined; a failure in one
/// never aborts the others. Revenue uses its own orders fetch so its failure
/// degrades only the revenue tile.
pub async fn load(client: &HttpClient) -> DashboardSnapshot {
    let (products, orders_result, users, revenue_orders, role_requests) = tokio::join!(
        client.products(),
        client.orders(),
        client.profiles(),
        client.orders(),
        client.role_requests(),
    );

    let products = fallback(products, "products");
    let order_list = fallback(orders_result, "orders");
    let users = fallback(users, "profiles");
    let revenue_orders = fallback(revenue_orders, "revenue");
    let role_requests = fallback(role_requests, "role-requests");

    let stats = orders::order_stats(&order_list);
    let pending_role_requests = role_requests
        .data
        .iter()
        .filter(|r| r.status == shared::models::RoleRequestStatus::Pending)
        .count();

    DashboardSnapshot {
        products: products.len(),
        orders: stats.total,
        users: users.len(),
        revenue: orders::total_revenue(&revenue_orders),
        pending_role_requests,
        recent_activity: orders::recent(&order_list, RECENT_ACTIVITY_LIMIT),
    }
}
