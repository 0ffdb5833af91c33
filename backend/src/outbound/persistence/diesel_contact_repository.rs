//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.
//!
//! The `contacts.hotel_id` foreign key is the only guard on the hotel
//! reference; violations surface as [`ContactRepositoryError::HotelNotFound`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;
use uuid::Uuid;

use crate::domain::Contact;
use crate::domain::ports::{ContactRepository, ContactRepositoryError};

use super::diesel_error_mapping::{DieselErrorMapper, map_diesel_error, map_pool_error};
use super::models::{ContactRow, NewContactRow};
use super::pool::DbPool;
use super::schema::contacts;

/// Diesel-backed implementation of the contact repository port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn references_hotels(constraint_name: Option<&str>) -> bool {
    constraint_name
        .map(str::to_lowercase)
        .is_some_and(|name| name.contains("hotel_id_fkey") || name.contains("hotels"))
}

fn map_foreign_key_violation(
    hotel_id: Uuid,
    constraint_name: Option<&str>,
) -> ContactRepositoryError {
    if references_hotels(constraint_name) {
        ContactRepositoryError::hotel_not_found(hotel_id)
    } else {
        warn!(
            constraint_name = ?constraint_name,
            "unrecognised foreign key violation on contacts"
        );
        ContactRepositoryError::query("foreign key violation")
    }
}

fn map_error(
    operation: &'static str,
    hotel_id: Option<Uuid>,
) -> impl FnOnce(diesel::result::Error) -> ContactRepositoryError {
    move |error| {
        map_diesel_error(
            error,
            operation,
            DieselErrorMapper {
                query: ContactRepositoryError::query,
                connection: ContactRepositoryError::connection,
                foreign_key: |constraint: Option<&str>| match hotel_id {
                    Some(hotel_id) => map_foreign_key_violation(hotel_id, constraint),
                    None => ContactRepositoryError::query("foreign key violation"),
                },
            },
        )
    }
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn create(&self, contact: &Contact) -> Result<(), ContactRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ContactRepositoryError::connection))?;

        diesel::insert_into(contacts::table)
            .values(NewContactRow::from(contact))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_error("insert contact", Some(contact.hotel_id)))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, ContactRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ContactRepositoryError::connection))?;

        let removed = diesel::delete(contacts::table.filter(contacts::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(map_error("delete contact", None))?;
        Ok(removed > 0)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ContactRepositoryError::connection))?;

        let row = contacts::table
            .filter(contacts::id.eq(id))
            .select(ContactRow::as_select())
            .first::<ContactRow>(&mut conn)
            .await
            .optional()
            .map_err(map_error("find contact", None))?;

        Ok(row.map(Contact::from))
    }

    async fn list_by_hotel(
        &self,
        hotel_id: &Uuid,
    ) -> Result<Vec<Contact>, ContactRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ContactRepositoryError::connection))?;

        let rows: Vec<ContactRow> = contacts::table
            .filter(contacts::hotel_id.eq(hotel_id))
            .order((contacts::created_at.asc(), contacts::id.asc()))
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_error("list contacts", None))?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }
}
