//! Driving port for contact reads.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Contact, Error};

/// Driving port for contact read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactQuery: Send + Sync {
    /// Contacts attached to `hotel_id`, oldest first.
    async fn list_contacts(&self, hotel_id: Uuid) -> Result<Vec<Contact>, Error>;
}

/// Fixture query implementation returning no contacts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureContactQuery;

#[async_trait]
impl ContactQuery for FixtureContactQuery {
    async fn list_contacts(&self, _hotel_id: Uuid) -> Result<Vec<Contact>, Error> {
        Ok(Vec::new())
    }
}
