//! Hotel directory and report request service.
//!
//! Hexagonal layout: [`domain`] holds the model, services and ports;
//! [`inbound`] adapts HTTP onto the driving ports; [`outbound`] implements the
//! driven ports over PostgreSQL, RabbitMQ and the search index.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
