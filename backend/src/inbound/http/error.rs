//! Translation of domain errors into HTTP responses.
//!
//! Status codes follow [`ErrorCode`]. Internal failures are logged in full
//! and reach the client only as a generic message, while unavailable
//! dependencies keep their `details` so a client can tell whether a report
//! job was queued before the failure.

use std::borrow::Cow;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

const REDACTED_MESSAGE: &str = "Internal server error";

impl From<ErrorCode> for StatusCode {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::InvalidRequest => Self::BAD_REQUEST,
            ErrorCode::NotFound => Self::NOT_FOUND,
            ErrorCode::ServiceUnavailable => Self::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => Self::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The error as the client may see it.
fn client_view(err: &Error) -> Cow<'_, Error> {
    match err.code() {
        ErrorCode::InternalError => {
            error!(
                message = err.message(),
                trace_id = err.trace_id(),
                "internal error hidden from client"
            );
            let redacted = Error::internal(REDACTED_MESSAGE);
            Cow::Owned(match err.trace_id() {
                Some(id) => redacted.with_trace_id(id),
                None => redacted,
            })
        }
        ErrorCode::ServiceUnavailable => {
            warn!(
                message = err.message(),
                details = ?err.details(),
                "dependency unavailable"
            );
            Cow::Borrowed(err)
        }
        _ => Cow::Borrowed(err),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        self.code().into()
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id));
        }
        response.json(client_view(self).as_ref())
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "unexpected actix error");
        Self::internal(REDACTED_MESSAGE)
    }
}
