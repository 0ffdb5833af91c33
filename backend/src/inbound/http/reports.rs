//! Report request HTTP handler.
//!
//! ```text
//! POST /reports/request
//! ```
//!
//! The body is optional. An empty body requests a report with no location
//! filter; any `id` or `status` supplied by the caller is discarded before
//! dispatch.

use actix_web::{HttpResponse, post, web};
use serde_json::json;

use crate::domain::{Error, ReportRequestDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ReportRequestDraftSchema, ReportRequestSchema};
use crate::inbound::http::state::HttpState;

fn parse_draft(body: &[u8]) -> Result<ReportRequestDraft, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ReportRequestDraft::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        Error::invalid_request("invalid request body")
            .with_details(json!({ "reason": err.to_string() }))
    })
}

/// Request a report. Answers 202 once the job is queued and indexed.
#[utoipa::path(
    post,
    path = "/reports/request",
    request_body(content = Option<ReportRequestDraftSchema>, content_type = "application/json"),
    responses(
        (status = 202, description = "Report request accepted", body = ReportRequestSchema),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 503, description = "Queue or index unavailable", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "requestReport"
)]
#[post("/reports/request")]
pub async fn request_report(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let draft = parse_draft(&body)?;
    let request = state.reports.request_report(draft).await?;
    Ok(HttpResponse::Accepted().json(request))
}
