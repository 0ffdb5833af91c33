//! Driven port for contact persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Contact;

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "contact repository query failed: {message}",
        /// The referenced hotel does not exist.
        HotelNotFound { hotel_id: Uuid } => "hotel {hotel_id} referenced by contact does not exist",
    }
}

/// Relational storage for [`Contact`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a fully materialised contact.
    async fn create(&self, contact: &Contact) -> Result<(), ContactRepositoryError>;

    /// Hard-delete a contact. Returns whether a row was removed.
    async fn delete(&self, id: &Uuid) -> Result<bool, ContactRepositoryError>;

    /// Look a contact up by identifier.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Contacts referencing `hotel_id`, oldest first.
    async fn list_by_hotel(&self, hotel_id: &Uuid)
    -> Result<Vec<Contact>, ContactRepositoryError>;
}
