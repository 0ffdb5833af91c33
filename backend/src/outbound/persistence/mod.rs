//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs and the table schema stay private to this module.
//! [`InMemoryDirectory`] backs both repositories when no database is
//! configured.
//!
//! # Example
//!
//! ```no_run
//! use hotel_service::outbound::persistence::{DbPool, DieselHotelRepository, PoolConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/hotels")).await?;
//! let repo = DieselHotelRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_contact_repository;
mod diesel_error_mapping;
mod diesel_hotel_repository;
mod in_memory;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_contact_repository::DieselContactRepository;
pub use diesel_hotel_repository::DieselHotelRepository;
pub use in_memory::InMemoryDirectory;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
