//! Role change request view pipeline

use shared::models::{RoleRequest, RoleRequestStatus};

/// Keep only requests in the given status; `None` passes everything.
pub fn filter_by_status(
    requests: &[RoleRequest],
    status: Option<RoleRequestStatus>,
) -> Vec<RoleRequest> {
    requests
        .iter()
        .filter(|r| status.is_none_or(|s| r.status == s))
        .cloned()
        .collect()
}

/// Header counters, accumulated in one pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleRequestStats {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn role_request_stats(requests: &[RoleRequest]) -> RoleRequestStats {
    let mut stats = RoleRequestStats::default();
    for request in requests {
        match request.status {
            RoleRequestStatus::Pending => stats.pending += 1,
            RoleRequestStatus::Approved => stats.approved += 1,
            RoleRequestStatus::Rejected => stats.rejected += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: i64, status: RoleRequestStatus) -> RoleRequest {
        RoleRequest {
            id,
            name: format!("user-{}", id),
            phone: "0811".to_string(),
            reason: "upgrade".to_string(),
            status,
            requested_at: "2024-03-01T08:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn stats_count_each_status() {
        let requests = vec![
            request(1, RoleRequestStatus::Pending),
            request(2, RoleRequestStatus::Pending),
            request(3, RoleRequestStatus::Approved),
            request(4, RoleRequestStatus::Rejected),
        ];
        let stats = role_request_stats(&requests);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.rejected, 1);
    }

    #[test]
    fn status_filter_is_a_subset() {
        let requests = vec![
            request(1, RoleRequestStatus::Pending),
            request(2, RoleRequestStatus::Approved),
        ];
        let pending = filter_by_status(&requests, Some(RoleRequestStatus::Pending));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, 1);
        assert_eq!(filter_by_status(&requests, None).len(), 2);
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        assert_eq!(role_request_stats(&[]), RoleRequestStats::default());
    }
}
