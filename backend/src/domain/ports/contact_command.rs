//! Driving port for contact mutations.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Contact, ContactDraft, Error};

/// Driving port for contact write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactCommand: Send + Sync {
    /// Attach a contact to a hotel, assigning identity and timestamps.
    async fn add_contact(&self, draft: ContactDraft) -> Result<Contact, Error>;

    /// Delete a contact. Unknown identifiers are not an error.
    async fn delete_contact(&self, id: Uuid) -> Result<(), Error>;
}

/// Fixture command implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureContactCommand;

#[async_trait]
impl ContactCommand for FixtureContactCommand {
    async fn add_contact(&self, draft: ContactDraft) -> Result<Contact, Error> {
        Ok(Contact::from_draft(Uuid::new_v4(), draft, Utc::now()))
    }

    async fn delete_contact(&self, _id: Uuid) -> Result<(), Error> {
        Ok(())
    }
}
