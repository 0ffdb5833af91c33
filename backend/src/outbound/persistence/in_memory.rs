//! In-process hotel and contact storage.
//!
//! Serves the repositories when no database is configured. Contents live for
//! the lifetime of the process.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    ContactRepository, ContactRepositoryError, HotelRepository, HotelRepositoryError,
};
use crate::domain::{Contact, Hotel};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
struct Directory {
    hotels: HashMap<Uuid, Hotel>,
    contacts: Vec<Contact>,
}

/// In-memory hotel and contact storage.
///
/// Implements both repositories over one store so contacts reference hotels
/// the way the relational schema enforces: inserts for unknown hotels fail
/// and deleting a hotel cascades to its contacts.
#[derive(Default)]
pub struct InMemoryDirectory {
    inner: Mutex<Directory>,
}

impl InMemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored hotels.
    pub fn hotel_count(&self) -> usize {
        lock(&self.inner).hotels.len()
    }

    /// Number of stored contacts across all hotels.
    pub fn contact_count(&self) -> usize {
        lock(&self.inner).contacts.len()
    }
}

#[async_trait]
impl HotelRepository for InMemoryDirectory {
    async fn create(&self, hotel: &Hotel) -> Result<(), HotelRepositoryError> {
        let mut directory = lock(&self.inner);
        if directory.hotels.contains_key(&hotel.id) {
            return Err(HotelRepositoryError::query(format!(
                "duplicate hotel id {}",
                hotel.id
            )));
        }
        directory.hotels.insert(hotel.id, hotel.clone());
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, HotelRepositoryError> {
        let mut directory = lock(&self.inner);
        let removed = directory.hotels.remove(id).is_some();
        if removed {
            directory.contacts.retain(|contact| contact.hotel_id != *id);
        }
        Ok(removed)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Hotel>, HotelRepositoryError> {
        Ok(lock(&self.inner).hotels.get(id).cloned())
    }

    async fn find_by_location(&self, location: &str) -> Result<Vec<Hotel>, HotelRepositoryError> {
        let mut hotels: Vec<Hotel> = lock(&self.inner)
            .hotels
            .values()
            .filter(|hotel| hotel.location.as_deref() == Some(location))
            .cloned()
            .collect();
        hotels.sort_by_key(|hotel| (hotel.created_at, hotel.id));
        Ok(hotels)
    }
}

#[async_trait]
impl ContactRepository for InMemoryDirectory {
    async fn create(&self, contact: &Contact) -> Result<(), ContactRepositoryError> {
        let mut directory = lock(&self.inner);
        if !directory.hotels.contains_key(&contact.hotel_id) {
            return Err(ContactRepositoryError::hotel_not_found(contact.hotel_id));
        }
        directory.contacts.push(contact.clone());
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, ContactRepositoryError> {
        let mut directory = lock(&self.inner);
        let before = directory.contacts.len();
        directory.contacts.retain(|contact| contact.id != *id);
        Ok(directory.contacts.len() != before)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Contact>, ContactRepositoryError> {
        Ok(lock(&self.inner)
            .contacts
            .iter()
            .find(|contact| contact.id == *id)
            .cloned())
    }

    async fn list_by_hotel(
        &self,
        hotel_id: &Uuid,
    ) -> Result<Vec<Contact>, ContactRepositoryError> {
        Ok(lock(&self.inner)
            .contacts
            .iter()
            .filter(|contact| contact.hotel_id == *hotel_id)
            .cloned()
            .collect())
    }
}
