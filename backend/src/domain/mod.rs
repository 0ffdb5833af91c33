//! Domain entities, services and ports.
//!
//! Purpose: define the hotel, contact and report request model together with
//! the services that own identity assignment and the dispatch policy. Nothing
//! here depends on HTTP, Diesel, AMQP or the search backend; those live behind
//! the traits in [`ports`].
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: transport agnostic failure payload.
//! - [`Hotel`], [`Contact`] and [`ReportRequest`]: domain records.
//! - [`HotelService`], [`ContactService`] and [`ReportDispatcher`]: driving
//!   port implementations.

pub mod ports;

mod contact;
mod contact_service;
mod error;
mod hotel;
mod hotel_service;
mod report_dispatcher;
mod report_request;
mod trace_id;

pub use self::contact::{Contact, ContactDraft};
pub use self::contact_service::ContactService;
pub use self::error::{Error, ErrorCode};
pub use self::hotel::{Hotel, HotelDraft, HotelOfficials};
pub use self::hotel_service::HotelService;
pub use self::report_dispatcher::{ReportDispatchError, ReportDispatcher};
pub use self::report_request::{
    REPORT_REQUESTS_COLLECTION, REPORT_REQUESTS_QUEUE, ReportRequest, ReportRequestDraft,
    ReportStatus,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for driving port operations.
///
/// # Examples
/// ```
/// use hotel_service::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("hotel missing"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
