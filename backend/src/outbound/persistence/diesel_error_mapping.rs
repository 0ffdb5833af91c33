//! Shared Diesel error mapping for the hotel and contact repositories.
//!
//! Repositories pass their own port-error constructors so the classification
//! lives in one place: closed connections become connection errors, foreign
//! key violations are handed to a caller-supplied mapper, everything else is
//! a query error.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map a pool failure onto a repository connection error.
pub(crate) fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    connection(error.into_message())
}

/// Constructors a repository supplies for [`map_diesel_error`].
pub(crate) struct DieselErrorMapper<Q, C, F> {
    pub query: Q,
    pub connection: C,
    pub foreign_key: F,
}

/// Classify a Diesel error and build the repository's port error.
pub(crate) fn map_diesel_error<E, Q, C, F>(
    error: DieselError,
    operation: &'static str,
    mapper: DieselErrorMapper<Q, C, F>,
) -> E
where
    Q: FnOnce(&'static str) -> E,
    C: FnOnce(&'static str) -> E,
    F: FnOnce(Option<&str>) -> E,
{
    let DieselErrorMapper {
        query,
        connection,
        foreign_key,
    } = mapper;

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), operation, "diesel operation failed");
        }
        _ => debug!(error = %error, operation, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            foreign_key(info.constraint_name())
        }
        _ => query("database error"),
    }
}
