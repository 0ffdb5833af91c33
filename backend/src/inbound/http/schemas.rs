//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. These
//! wrappers mirror their serialised shape and are registered under the domain
//! type's path so the generated document names them consistently.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A downstream dependency is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "hotel_id must be a valid UUID")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, e.g. the dispatch stage that failed.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Hotel`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Hotel)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct HotelSchema {
    #[schema(format = "uuid")]
    id: String,
    #[schema(example = "Gustave")]
    official_name: String,
    #[schema(example = "H.")]
    official_surname: String,
    #[schema(example = "Grand Budapest Hotel")]
    company_title: String,
    #[schema(example = "Nebelsbad")]
    location: Option<String>,
    #[schema(format = "date-time")]
    created_at: String,
    #[schema(format = "date-time")]
    updated_at: String,
}

/// OpenAPI schema for [`crate::domain::HotelDraft`].
///
/// Any `id` or timestamp fields sent by the caller are ignored.
#[derive(ToSchema)]
#[schema(as = crate::domain::HotelDraft)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct HotelDraftSchema {
    official_name: String,
    official_surname: String,
    company_title: String,
    location: Option<String>,
}

/// OpenAPI schema for [`crate::domain::HotelOfficials`].
#[derive(ToSchema)]
#[schema(as = crate::domain::HotelOfficials)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct HotelOfficialsSchema {
    #[schema(format = "uuid")]
    hotel_id: String,
    official_name: String,
    official_surname: String,
}

/// OpenAPI schema for [`crate::domain::Contact`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Contact)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactSchema {
    #[schema(format = "uuid")]
    id: String,
    #[schema(format = "uuid")]
    hotel_id: String,
    #[schema(rename = "type", example = "phone")]
    contact_type: String,
    #[schema(example = "+36 1 555 0100")]
    content: String,
    #[schema(format = "date-time")]
    created_at: String,
    #[schema(format = "date-time")]
    updated_at: String,
}

/// OpenAPI schema for [`crate::domain::ReportRequest`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ReportRequest)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReportRequestSchema {
    #[schema(format = "uuid")]
    id: String,
    #[schema(example = "pending")]
    status: String,
    #[schema(example = "Paris")]
    location: Option<String>,
}

/// OpenAPI schema for [`crate::domain::ReportRequestDraft`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ReportRequestDraft)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReportRequestDraftSchema {
    #[schema(example = "Paris")]
    location: Option<String>,
}
