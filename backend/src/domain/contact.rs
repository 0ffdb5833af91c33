//! Hotel contact records.
//!
//! A contact references a hotel by ID; it does not own the hotel. Whether the
//! referenced hotel exists is left to the store's referential integrity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-supplied contact fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub hotel_id: Uuid,
    #[serde(rename = "type")]
    pub contact_type: String,
    pub content: String,
}

/// Persisted contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub hotel_id: Uuid,
    #[serde(rename = "type")]
    pub contact_type: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Materialise a draft with a fresh identity and timestamps.
    #[must_use]
    pub fn from_draft(id: Uuid, draft: ContactDraft, now: DateTime<Utc>) -> Self {
        let ContactDraft {
            hotel_id,
            contact_type,
            content,
        } = draft;
        Self {
            id,
            hotel_id,
            contact_type,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn contact_type_uses_type_on_the_wire() {
        let contact = Contact::from_draft(
            Uuid::new_v4(),
            ContactDraft {
                hotel_id: Uuid::new_v4(),
                contact_type: "email".into(),
                content: "desk@example.com".into(),
            },
            Utc::now(),
        );

        let value = serde_json::to_value(&contact).expect("contact serialises");
        assert_eq!(value["type"], "email");
        assert!(value.get("contact_type").is_none());
    }
}
