//! Hotel domain service.
//!
//! Owns identity and timestamp assignment for hotels and delegates storage to
//! the [`HotelRepository`] port. Implements both hotel driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{HotelCommand, HotelQuery, HotelRepository, HotelRepositoryError};
use crate::domain::{Error, Hotel, HotelDraft, HotelOfficials};

fn map_hotel_repository_error(error: HotelRepositoryError) -> Error {
    match error {
        HotelRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("hotel repository unavailable: {message}"))
        }
        HotelRepositoryError::Query { message } => {
            Error::internal(format!("hotel repository error: {message}"))
        }
    }
}

/// Hotel service implementing the hotel command and query ports.
pub struct HotelService<R> {
    hotel_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> Clone for HotelService<R> {
    fn clone(&self) -> Self {
        Self {
            hotel_repo: Arc::clone(&self.hotel_repo),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R> HotelService<R> {
    /// Create a service over a repository and a clock.
    pub fn new(hotel_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { hotel_repo, clock }
    }
}

impl<R> HotelService<R>
where
    R: HotelRepository,
{
    async fn require_hotel(&self, id: Uuid) -> Result<Hotel, Error> {
        self.hotel_repo
            .find_by_id(&id)
            .await
            .map_err(map_hotel_repository_error)?
            .ok_or_else(|| Error::not_found(format!("hotel {id} not found")))
    }
}

#[async_trait]
impl<R> HotelCommand for HotelService<R>
where
    R: HotelRepository,
{
    async fn create_hotel(&self, draft: HotelDraft) -> Result<Hotel, Error> {
        let hotel = Hotel::from_draft(Uuid::new_v4(), draft, self.clock.utc());
        self.hotel_repo
            .create(&hotel)
            .await
            .map_err(map_hotel_repository_error)?;
        Ok(hotel)
    }

    async fn delete_hotel(&self, id: Uuid) -> Result<(), Error> {
        let deleted = self
            .hotel_repo
            .delete(&id)
            .await
            .map_err(map_hotel_repository_error)?;
        if !deleted {
            debug!(hotel_id = %id, "delete matched no hotel");
        }
        Ok(())
    }
}

#[async_trait]
impl<R> HotelQuery for HotelService<R>
where
    R: HotelRepository,
{
    async fn get_hotel(&self, id: Uuid) -> Result<Hotel, Error> {
        self.require_hotel(id).await
    }

    async fn list_officials(&self, id: Uuid) -> Result<HotelOfficials, Error> {
        self.require_hotel(id).await.map(HotelOfficials::from)
    }

    async fn find_by_location(&self, location: String) -> Result<Vec<Hotel>, Error> {
        self.hotel_repo
            .find_by_location(&location)
            .await
            .map_err(map_hotel_repository_error)
    }
}

#[cfg(test)]
#[path = "hotel_service_tests.rs"]
mod tests;
