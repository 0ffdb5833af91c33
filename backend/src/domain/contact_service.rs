//! Contact domain service.
//!
//! Mirrors the hotel service: identity and timestamps are assigned here,
//! storage and referential integrity belong to the [`ContactRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{
    ContactCommand, ContactQuery, ContactRepository, ContactRepositoryError,
};
use crate::domain::{Contact, ContactDraft, Error};

fn map_repository_error(error: ContactRepositoryError) -> Error {
    match error {
        ContactRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("contact repository unavailable: {message}"))
        }
        ContactRepositoryError::Query { message } => {
            Error::internal(format!("contact repository error: {message}"))
        }
        ContactRepositoryError::HotelNotFound { hotel_id } => {
            Error::not_found(format!("hotel {hotel_id} not found"))
        }
    }
}

/// Contact service implementing the contact command and query ports.
pub struct ContactService<R> {
    contact_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> Clone for ContactService<R> {
    fn clone(&self) -> Self {
        Self {
            contact_repo: Arc::clone(&self.contact_repo),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R> ContactService<R> {
    /// Create a service over a repository and a clock.
    pub fn new(contact_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            contact_repo,
            clock,
        }
    }
}

#[async_trait]
impl<R> ContactCommand for ContactService<R>
where
    R: ContactRepository,
{
    async fn add_contact(&self, draft: ContactDraft) -> Result<Contact, Error> {
        let contact = Contact::from_draft(Uuid::new_v4(), draft, self.clock.utc());
        self.contact_repo
            .create(&contact)
            .await
            .map_err(map_repository_error)?;
        Ok(contact)
    }

    async fn delete_contact(&self, id: Uuid) -> Result<(), Error> {
        let deleted = self
            .contact_repo
            .delete(&id)
            .await
            .map_err(map_repository_error)?;
        if !deleted {
            debug!(contact_id = %id, "delete matched no contact");
        }
        Ok(())
    }
}

#[async_trait]
impl<R> ContactQuery for ContactService<R>
where
    R: ContactRepository,
{
    async fn list_contacts(&self, hotel_id: Uuid) -> Result<Vec<Contact>, Error> {
        self.contact_repo
            .list_by_hotel(&hotel_id)
            .await
            .map_err(map_repository_error)
    }
}
