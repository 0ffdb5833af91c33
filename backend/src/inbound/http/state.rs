//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ContactCommand, ContactQuery, FixtureContactCommand, FixtureContactQuery, FixtureHotelCommand,
    FixtureHotelQuery, FixtureReportRequestCommand, HotelCommand, HotelQuery,
    ReportRequestCommand,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub hotels: Arc<dyn HotelCommand>,
    pub hotels_query: Arc<dyn HotelQuery>,
    pub contacts: Arc<dyn ContactCommand>,
    pub contacts_query: Arc<dyn ContactQuery>,
    pub reports: Arc<dyn ReportRequestCommand>,
}

impl Default for HttpStatePorts {
    fn default() -> Self {
        Self {
            hotels: Arc::new(FixtureHotelCommand),
            hotels_query: Arc::new(FixtureHotelQuery),
            contacts: Arc::new(FixtureContactCommand),
            contacts_query: Arc::new(FixtureContactQuery),
            reports: Arc::new(FixtureReportRequestCommand),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub hotels: Arc<dyn HotelCommand>,
    pub hotels_query: Arc<dyn HotelQuery>,
    pub contacts: Arc<dyn ContactCommand>,
    pub contacts_query: Arc<dyn ContactQuery>,
    pub reports: Arc<dyn ReportRequestCommand>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use hotel_service::domain::ports::FixtureReportRequestCommand;
    /// use hotel_service::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     reports: Arc::new(FixtureReportRequestCommand),
    ///     ..HttpStatePorts::default()
    /// });
    /// let _reports = state.reports.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            hotels,
            hotels_query,
            contacts,
            contacts_query,
            reports,
        } = ports;
        Self {
            hotels,
            hotels_query,
            contacts,
            contacts_query,
            reports,
        }
    }
}
