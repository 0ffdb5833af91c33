//! Driving port for requesting report generation.

use async_trait::async_trait;

use crate::domain::{Error, ReportRequest, ReportRequestDraft};

/// Driving port accepting report requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRequestCommand: Send + Sync {
    /// Dispatch a report request and return it with its assigned identity.
    ///
    /// Failures are `service_unavailable` errors whose details report the
    /// failing stage and whether the job was queued.
    async fn request_report(&self, draft: ReportRequestDraft) -> Result<ReportRequest, Error>;
}

/// Fixture command that assigns identity without dispatching anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReportRequestCommand;

#[async_trait]
impl ReportRequestCommand for FixtureReportRequestCommand {
    async fn request_report(&self, draft: ReportRequestDraft) -> Result<ReportRequest, Error> {
        Ok(ReportRequest::pending(draft))
    }
}
