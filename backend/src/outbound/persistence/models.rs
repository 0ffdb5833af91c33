//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! leave it.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Contact, Hotel};

use super::schema::{contacts, hotels};

/// Row struct for reading from the hotels table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = hotels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HotelRow {
    pub id: Uuid,
    pub official_name: String,
    pub official_surname: String,
    pub company_title: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        let HotelRow {
            id,
            official_name,
            official_surname,
            company_title,
            location,
            created_at,
            updated_at,
        } = row;
        Self {
            id,
            official_name,
            official_surname,
            company_title,
            location,
            created_at,
            updated_at,
        }
    }
}

/// Insertable struct for new hotel records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = hotels)]
pub(crate) struct NewHotelRow<'a> {
    pub id: Uuid,
    pub official_name: &'a str,
    pub official_surname: &'a str,
    pub company_title: &'a str,
    pub location: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Hotel> for NewHotelRow<'a> {
    fn from(hotel: &'a Hotel) -> Self {
        Self {
            id: hotel.id,
            official_name: &hotel.official_name,
            official_surname: &hotel.official_surname,
            company_title: &hotel.company_title,
            location: hotel.location.as_deref(),
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
        }
    }
}

/// Row struct for reading from the contacts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub contact_type: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        let ContactRow {
            id,
            hotel_id,
            contact_type,
            content,
            created_at,
            updated_at,
        } = row;
        Self {
            id,
            hotel_id,
            contact_type,
            content,
            created_at,
            updated_at,
        }
    }
}

/// Insertable struct for new contact records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub contact_type: &'a str,
    pub content: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Contact> for NewContactRow<'a> {
    fn from(contact: &'a Contact) -> Self {
        Self {
            id: contact.id,
            hotel_id: contact.hotel_id,
            contact_type: &contact.contact_type,
            content: &contact.content,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}
