//! Driven port for hotel persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Hotel;

use super::define_port_error;

define_port_error! {
    /// Errors raised by hotel repository adapters.
    pub enum HotelRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "hotel repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "hotel repository query failed: {message}",
    }
}

/// Relational storage for [`Hotel`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Insert a fully materialised hotel.
    async fn create(&self, hotel: &Hotel) -> Result<(), HotelRepositoryError>;

    /// Hard-delete a hotel. Returns whether a row was removed.
    async fn delete(&self, id: &Uuid) -> Result<bool, HotelRepositoryError>;

    /// Look a hotel up by identifier.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Hotel>, HotelRepositoryError>;

    /// All hotels whose location equals `location`.
    async fn find_by_location(&self, location: &str) -> Result<Vec<Hotel>, HotelRepositoryError>;
}
