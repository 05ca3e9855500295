//! Chat view pipeline
//!
//! The chat sidebar lists users filtered/sorted against their orders and
//! conversation history; the header shows conversation statistics. Both are
//! computed against an explicit `now` so polling can recompute them without
//! touching the ambient clock.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use shared::models::{ChatMessage, Order, UserProfile};

use super::contains_ci;

/// Sort keys offered by the chat user list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSort {
    NameAsc,
    NameDesc,
    /// Most recent message first; users without messages sink to the end
    RecentChat,
    /// Most orders first
    MostOrders,
}

/// Filter parameters for the chat user list
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Matched against name and phone
    pub search: Option<String>,
    /// Keep only users owning at least one order
    pub with_orders: bool,
    pub sort: Option<UserSort>,
}

impl UserFilter {
    /// Produce the display copy of the user list.
    pub fn apply(
        &self,
        users: &[UserProfile],
        orders: &[Order],
        messages: &HashMap<i64, Vec<ChatMessage>>,
    ) -> Vec<UserProfile> {
        let mut result: Vec<UserProfile> = users
            .iter()
            .filter(|u| self.matches(u))
            .cloned()
            .collect();

        if self.with_orders {
            let with_orders: HashSet<i64> = orders.iter().map(|o| o.user_id).collect();
            result.retain(|u| with_orders.contains(&u.id));
        }

        match self.sort {
            // Missing names sort as the empty string rather than erroring out
            Some(UserSort::NameAsc) => result.sort_by(|a, b| {
                a.name.as_deref().unwrap_or_default().cmp(b.name.as_deref().unwrap_or_default())
            }),
            Some(UserSort::NameDesc) => result.sort_by(|a, b| {
                b.name.as_deref().unwrap_or_default().cmp(a.name.as_deref().unwrap_or_default())
            }),
            Some(UserSort::RecentChat) => {
                let latest = |user: &UserProfile| -> DateTime<Utc> {
                    messages
                        .get(&user.id)
                        .and_then(|m| m.last())
                        .map(|m| m.sent_at)
                        .unwrap_or(DateTime::<Utc>::MIN_UTC)
                };
                result.sort_by_key(|u| std::cmp::Reverse(latest(u)));
            }
            Some(UserSort::MostOrders) => {
                let counts = order_counts(orders);
                result.sort_by_key(|u| std::cmp::Reverse(counts.get(&u.id).copied().unwrap_or(0)));
            }
            None => {}
        }

        result
    }

    fn matches(&self, user: &UserProfile) -> bool {
        if let Some(term) = self.search.as_deref().filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            let hit = user.name.as_deref().is_some_and(|n| contains_ci(n, &term))
                || user.phone.as_deref().is_some_and(|p| contains_ci(p, &term));
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Orders per user, for the sidebar badges and the most-orders sort.
pub fn order_counts(orders: &[Order]) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for order in orders {
        *counts.entry(order.user_id).or_insert(0) += 1;
    }
    counts
}

/// Header statistics for the chat view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatStats {
    /// Loaded conversations
    pub conversations: usize,
    pub messages: usize,
    /// Messages sent since the start of today's calendar day
    pub messages_today: usize,
    /// Conversations with traffic since the start of the previous calendar day
    pub active_chats: usize,
}

/// Recompute chat statistics from the loaded conversations.
pub fn chat_stats(messages: &HashMap<i64, Vec<ChatMessage>>, now: DateTime<Utc>) -> ChatStats {
    let start_of_today = now.date_naive().and_hms_opt(0, 0, 0).unwrap().and_utc();
    let active_cutoff = start_of_today - Duration::hours(24);

    ChatStats {
        conversations: messages.len(),
        messages: messages.values().map(|m| m.len()).sum(),
        messages_today: messages
            .values()
            .flatten()
            .filter(|m| m.sent_at >= start_of_today)
            .count(),
        active_chats: messages
            .values()
            .filter(|thread| thread.iter().any(|m| m.sent_at >= active_cutoff))
            .count(),
    }
}
