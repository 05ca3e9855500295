//! Orders view pipeline
//!
//! Search/status/date filtering, stable sorting, header statistics, and the
//! per-customer roll-up table.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use shared::models::{Order, OrderStatus};

use super::contains_ci;

/// Sort keys offered by the orders table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSort {
    DateAsc,
    DateDesc,
    AmountAsc,
    AmountDesc,
}

/// UI-driven filter parameters, read at render time
///
/// Absent fields are no-ops: a default filter passes every record through
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Matched against the order id, customer name, and customer phone
    pub search: Option<String>,
    pub status: Option<OrderStatus>,
    /// Matches orders created on this calendar day
    pub date: Option<NaiveDate>,
    pub sort: Option<OrderSort>,
}

impl OrderFilter {
    /// Produce the display copy: filtered, then sorted when a key is set.
    ///
    /// The source slice is left untouched; with no sort key the result
    /// preserves the source ordering.
    pub fn apply(&self, orders: &[Order]) -> Vec<Order> {
        let mut result: Vec<Order> = orders.iter().filter(|o| self.matches(o)).cloned().collect();

        match self.sort {
            Some(OrderSort::DateAsc) => result.sort_by_key(|o| o.created_at),
            Some(OrderSort::DateDesc) => {
                result.sort_by_key(|o| std::cmp::Reverse(o.created_at))
            }
            Some(OrderSort::AmountAsc) => {
                result.sort_by(|a, b| a.total_amount.total_cmp(&b.total_amount))
            }
            Some(OrderSort::AmountDesc) => {
                result.sort_by(|a, b| b.total_amount.total_cmp(&a.total_amount))
            }
            None => {}
        }

        result
    }

    /// A record passes when every active predicate matches.
    fn matches(&self, order: &Order) -> bool {
        if let Some(term) = self.search.as_deref().filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let hit = order.id.to_string().contains(&term)
                || order
                    .user_name
                    .as_deref()
                    .is_some_and(|n| contains_ci(n, &term))
                || order
                    .user_phone
                    .as_deref()
                    .is_some_and(|p| contains_ci(p, &term));
            if !hit {
                return false;
            }
        }

        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }

        if let Some(date) = self.date {
            if order.created_at.date_naive() != date {
                return false;
            }
        }

        true
    }
}

/// Header statistics for the orders view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    /// Terminal-success orders (completed or delivered)
    pub completed: usize,
    /// Distinct customers with at least one order
    pub active_customers: usize,
}

/// Recompute the header statistics from the full collection.
pub fn order_stats(orders: &[Order]) -> OrderStats {
    let customers: HashSet<i64> = orders.iter().map(|o| o.user_id).collect();
    OrderStats {
        total: orders.len(),
        pending: orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count(),
        completed: orders
            .iter()
            .filter(|o| o.status.is_terminal_success())
            .count(),
        active_customers: customers.len(),
    }
}

/// Realized revenue: sum of amounts over terminal-success orders.
pub fn total_revenue(orders: &[Order]) -> f64 {
    orders
        .iter()
        .filter(|o| o.status.is_terminal_success())
        .map(|o| o.total_amount)
        .sum()
}

/// Per-customer roll-up row
#[derive(Debug, Clone)]
pub struct CustomerSummary {
    pub user_id: i64,
    pub name: String,
    pub phone: String,
    pub order_count: usize,
    pub total_amount: f64,
    /// Status and date of the customer's latest order
    pub last_status: OrderStatus,
    pub last_order_date: DateTime<Utc>,
}

/// Roll orders up by customer in a single pass.
///
/// `last_status`/`last_order_date` track the strictly latest order; on equal
/// timestamps the earlier-seen record is kept. Output is sorted by order
/// count descending (stable, so ties keep first-seen order).
pub fn group_by_customer(orders: &[Order]) -> Vec<CustomerSummary> {
    let mut by_customer: HashMap<i64, CustomerSummary> = HashMap::new();
    let mut seen_order: Vec<i64> = Vec::new();

    for order in orders {
        match by_customer.get_mut(&order.user_id) {
            Some(summary) => {
                summary.order_count += 1;
                summary.total_amount += order.total_amount;
                if order.created_at > summary.last_order_date {
                    summary.last_status = order.status;
                    summary.last_order_date = order.created_at;
                }
            }
            None => {
                seen_order.push(order.user_id);
                by_customer.insert(
                    order.user_id,
                    CustomerSummary {
                        user_id: order.user_id,
                        name: order.user_name.clone().unwrap_or_else(|| "User".to_string()),
                        phone: order.user_phone.clone().unwrap_or_default(),
                        order_count: 1,
                        total_amount: order.total_amount,
                        last_status: order.status,
                        last_order_date: order.created_at,
                    },
                );
            }
        }
    }

    let mut result: Vec<CustomerSummary> = seen_order
        .into_iter()
        .filter_map(|id| by_customer.remove(&id))
        .collect();
    result.sort_by_key(|c| std::cmp::Reverse(c.order_count));
    result
}

/// Most recent `n` orders by creation date (dashboard activity feed).
pub fn recent(orders: &[Order], n: usize) -> Vec<Order> {
    let mut sorted: Vec<Order> = orders.to_vec();
    sorted.sort_by_key(|o| std::cmp::Reverse(o.created_at));
    sorted.truncate(n);
    sorted
}
