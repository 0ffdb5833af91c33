//! Hotel aggregate and its officials projection.
//!
//! The identifier and audit timestamps are assigned by
//! [`HotelService`](crate::domain::HotelService) when a hotel is created;
//! callers only ever supply a [`HotelDraft`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-supplied hotel fields.
///
/// No field validation happens here; callers supply well-formed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelDraft {
    pub official_name: String,
    pub official_surname: String,
    pub company_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Persisted hotel record.
///
/// ## Invariants
/// - `id` is assigned exactly once at creation and never changes.
/// - `created_at <= updated_at`; both equal the creation instant since
///   hotels are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: Uuid,
    pub official_name: String,
    pub official_surname: String,
    pub company_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hotel {
    /// Materialise a draft with a fresh identity and timestamps.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use hotel_service::domain::{Hotel, HotelDraft};
    /// use uuid::Uuid;
    ///
    /// let now = Utc::now();
    /// let hotel = Hotel::from_draft(
    ///     Uuid::new_v4(),
    ///     HotelDraft {
    ///         official_name: "Ada".into(),
    ///         official_surname: "Lovelace".into(),
    ///         company_title: "Analytical Inns".into(),
    ///         location: Some("London".into()),
    ///     },
    ///     now,
    /// );
    /// assert_eq!(hotel.created_at, now);
    /// assert_eq!(hotel.updated_at, now);
    /// ```
    #[must_use]
    pub fn from_draft(id: Uuid, draft: HotelDraft, now: DateTime<Utc>) -> Self {
        let HotelDraft {
            official_name,
            official_surname,
            company_title,
            location,
        } = draft;
        Self {
            id,
            official_name,
            official_surname,
            company_title,
            location,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Read-only officials projection of a [`Hotel`]. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelOfficials {
    pub hotel_id: Uuid,
    pub official_name: String,
    pub official_surname: String,
}

impl From<Hotel> for HotelOfficials {
    fn from(value: Hotel) -> Self {
        Self {
            hotel_id: value.id,
            official_name: value.official_name,
            official_surname: value.official_surname,
        }
    }
}
