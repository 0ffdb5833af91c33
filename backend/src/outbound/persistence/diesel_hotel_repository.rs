//! PostgreSQL-backed `HotelRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::Hotel;
use crate::domain::ports::{HotelRepository, HotelRepositoryError};

use super::diesel_error_mapping::{DieselErrorMapper, map_diesel_error, map_pool_error};
use super::models::{HotelRow, NewHotelRow};
use super::pool::DbPool;
use super::schema::hotels;

/// Diesel-backed implementation of the hotel repository port.
#[derive(Clone)]
pub struct DieselHotelRepository {
    pool: DbPool,
}

impl DieselHotelRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(operation: &'static str) -> impl FnOnce(diesel::result::Error) -> HotelRepositoryError {
    move |error| {
        map_diesel_error(
            error,
            operation,
            DieselErrorMapper {
                query: HotelRepositoryError::query,
                connection: HotelRepositoryError::connection,
                foreign_key: |_: Option<&str>| HotelRepositoryError::query("foreign key violation"),
            },
        )
    }
}

#[async_trait]
impl HotelRepository for DieselHotelRepository {
    async fn create(&self, hotel: &Hotel) -> Result<(), HotelRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, HotelRepositoryError::connection))?;

        diesel::insert_into(hotels::table)
            .values(NewHotelRow::from(hotel))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_error("insert hotel"))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, HotelRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, HotelRepositoryError::connection))?;

        let removed = diesel::delete(hotels::table.filter(hotels::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(map_error("delete hotel"))?;
        Ok(removed > 0)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Hotel>, HotelRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, HotelRepositoryError::connection))?;

        let row = hotels::table
            .filter(hotels::id.eq(id))
            .select(HotelRow::as_select())
            .first::<HotelRow>(&mut conn)
            .await
            .optional()
            .map_err(map_error("find hotel"))?;

        Ok(row.map(Hotel::from))
    }

    async fn find_by_location(&self, location: &str) -> Result<Vec<Hotel>, HotelRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, HotelRepositoryError::connection))?;

        let rows: Vec<HotelRow> = hotels::table
            .filter(hotels::location.eq(location))
            .order((hotels::created_at.asc(), hotels::id.asc()))
            .select(HotelRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_error("find hotels by location"))?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }
}
