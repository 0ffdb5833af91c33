//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`ReportQueue`], [`SearchIndex`]) are
//! implemented by outbound adapters. Driving ports (`*Command`, `*Query`)
//! are implemented by domain services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_command;
mod contact_query;
mod contact_repository;
mod hotel_command;
mod hotel_query;
mod hotel_repository;
mod report_queue;
mod report_request_command;
mod search_index;

#[cfg(test)]
pub use contact_command::MockContactCommand;
pub use contact_command::{ContactCommand, FixtureContactCommand};
#[cfg(test)]
pub use contact_query::MockContactQuery;
pub use contact_query::{ContactQuery, FixtureContactQuery};
#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactRepository, ContactRepositoryError};
#[cfg(test)]
pub use hotel_command::MockHotelCommand;
pub use hotel_command::{FixtureHotelCommand, HotelCommand};
#[cfg(test)]
pub use hotel_query::MockHotelQuery;
pub use hotel_query::{FixtureHotelQuery, HotelQuery};
#[cfg(test)]
pub use hotel_repository::MockHotelRepository;
pub use hotel_repository::{HotelRepository, HotelRepositoryError};
#[cfg(test)]
pub use report_queue::MockReportQueue;
pub use report_queue::{QueuePublishError, ReportQueue};
#[cfg(test)]
pub use report_request_command::MockReportRequestCommand;
pub use report_request_command::{FixtureReportRequestCommand, ReportRequestCommand};
#[cfg(test)]
pub use search_index::MockSearchIndex;
pub use search_index::{SearchIndex, SearchIndexError};
