//! Report request records handed to the report worker.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Queue the report worker consumes.
pub const REPORT_REQUESTS_QUEUE: &str = "report_requests";

/// Search collection holding discoverable report requests.
pub const REPORT_REQUESTS_COLLECTION: &str = "report_requests";

/// Lifecycle status of a report request.
///
/// Only `Pending` is ever assigned here; later transitions belong to the
/// report worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Accepted and waiting for the worker.
    Pending,
}

/// Caller input for a report request.
///
/// Deliberately carries no identity or status fields; those are assigned at
/// dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequestDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A report request with assigned identity.
///
/// Serialises to the flat JSON shape shared by the queue message, the search
/// document and the HTTP response: `{"id", "status", "location"?}`.
///
/// # Examples
/// ```
/// use hotel_service::domain::{ReportRequest, ReportRequestDraft, ReportStatus};
///
/// let request = ReportRequest::pending(ReportRequestDraft {
///     location: Some("Paris".into()),
/// });
/// assert_eq!(request.status, ReportStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub id: Uuid,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ReportRequest {
    /// Assign a fresh identity and the pending status to a draft.
    #[must_use]
    pub fn pending(draft: ReportRequestDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            status: ReportStatus::Pending,
            location: draft.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn pending_assigns_distinct_ids() {
        let first = ReportRequest::pending(ReportRequestDraft::default());
        let second = ReportRequest::pending(ReportRequestDraft::default());
        assert_ne!(first.id, second.id);
        assert!(!first.id.is_nil());
    }

    #[rstest]
    fn serialises_flat_shape_with_location() {
        let request = ReportRequest {
            id: Uuid::nil(),
            status: ReportStatus::Pending,
            location: Some("Paris".into()),
        };
        assert_eq!(
            serde_json::to_value(&request).expect("serialises"),
            json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "status": "pending",
                "location": "Paris",
            })
        );
    }

    #[rstest]
    fn omits_absent_location() {
        let request = ReportRequest {
            id: Uuid::nil(),
            status: ReportStatus::Pending,
            location: None,
        };
        let value = serde_json::to_value(&request).expect("serialises");
        assert!(value.get("location").is_none());
    }

    #[rstest]
    fn draft_ignores_caller_identity_fields() {
        let draft: ReportRequestDraft = serde_json::from_value(json!({
            "id": "11111111-1111-1111-1111-111111111111",
            "status": "done",
            "location": "Lyon",
        }))
        .expect("unknown fields are ignored");
        assert_eq!(draft.location.as_deref(), Some("Lyon"));
    }
}
