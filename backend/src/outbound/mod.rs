//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL repositories using Diesel ORM
//! - **queue**: RabbitMQ report queue publisher (plus a logging stub)
//! - **search**: Elasticsearch document index (plus a logging stub)
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod persistence;
pub mod queue;
pub mod search;
