//! Behaviour tests for report request dispatch.
//!
//! Scenarios drive the dispatcher through its driving port with recording
//! queue and index doubles, checking what each outcome leaves behind.

use std::sync::Arc;

use futures::executor::block_on;
use hotel_service::domain::ports::ReportRequestCommand;
use hotel_service::domain::{
    Error, ErrorCode, REPORT_REQUESTS_COLLECTION, REPORT_REQUESTS_QUEUE, ReportDispatcher,
    ReportRequest, ReportRequestDraft, ReportStatus,
};
use hotel_service::test_support::{RecordingReportQueue, RecordingSearchIndex};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::Value;

type Dispatcher = ReportDispatcher<RecordingReportQueue, RecordingSearchIndex>;

// -----------------------------------------------------------------------------
// Test World
// -----------------------------------------------------------------------------

#[derive(Default, ScenarioState)]
struct ReportDispatchWorld {
    queue: Slot<Arc<RecordingReportQueue>>,
    index: Slot<Arc<RecordingSearchIndex>>,
    dispatcher: Slot<Arc<Dispatcher>>,
    outcomes: Slot<Vec<Result<ReportRequest, Error>>>,
}

impl ReportDispatchWorld {
    fn wire(&self, queue_down: bool, index_down: bool) {
        let queue = Arc::new(RecordingReportQueue::new());
        queue.set_unavailable(queue_down);
        let index = Arc::new(RecordingSearchIndex::new());
        index.set_unavailable(index_down);
        let dispatcher = Arc::new(ReportDispatcher::new(
            Arc::clone(&queue),
            Arc::clone(&index),
        ));
        self.queue.set(queue);
        self.index.set(index);
        self.dispatcher.set(dispatcher);
        self.outcomes.set(Vec::new());
    }

    fn request(&self, draft: ReportRequestDraft) {
        let dispatcher = self.dispatcher.get().expect("dispatcher wired");
        let outcome = block_on(dispatcher.request_report(draft));
        let mut outcomes = self.outcomes.get().unwrap_or_default();
        outcomes.push(outcome);
        self.outcomes.set(outcomes);
    }

    fn accepted(&self) -> Vec<ReportRequest> {
        self.outcomes
            .get()
            .expect("a request was made")
            .into_iter()
            .map(|outcome| outcome.expect("request accepted"))
            .collect()
    }

    fn last_accepted(&self) -> ReportRequest {
        self.accepted()
            .pop()
            .expect("at least one accepted request")
    }

    fn last_failure(&self) -> Error {
        self.outcomes
            .get()
            .expect("a request was made")
            .pop()
            .expect("at least one outcome")
            .expect_err("request failed")
    }

    fn published(&self) -> Vec<(String, Value)> {
        self.queue.get().expect("queue wired").published()
    }
}

#[fixture]
fn world() -> ReportDispatchWorld {
    ReportDispatchWorld::default()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("a report dispatcher with a healthy queue and index")]
fn a_healthy_dispatcher(world: &ReportDispatchWorld) {
    world.wire(false, false);
}

#[given("a report dispatcher whose queue is unavailable")]
fn a_dispatcher_with_queue_outage(world: &ReportDispatchWorld) {
    world.wire(true, false);
}

#[given("a report dispatcher whose index is unavailable")]
fn a_dispatcher_with_index_outage(world: &ReportDispatchWorld) {
    world.wire(false, true);
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("a report is requested for {location}")]
fn a_report_is_requested_for(world: &ReportDispatchWorld, location: String) {
    world.request(ReportRequestDraft {
        location: Some(location),
    });
}

#[when("a report is requested without a location")]
fn a_report_is_requested_without_location(world: &ReportDispatchWorld) {
    world.request(ReportRequestDraft::default());
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the request is accepted as pending with location {location}")]
fn the_request_is_pending_with_location(world: &ReportDispatchWorld, location: String) {
    let request = world.last_accepted();
    assert_eq!(request.status, ReportStatus::Pending);
    assert_eq!(request.location.as_deref(), Some(location.as_str()));
    assert!(!request.id.is_nil());
}

#[then("the accepted request carries no location")]
fn the_request_carries_no_location(world: &ReportDispatchWorld) {
    let request = world.last_accepted();
    assert!(request.location.is_none());
    let (_, message) = world
        .published()
        .pop()
        .expect("a message was published");
    assert!(message.get("location").is_none());
}

#[then("the queue holds {count} message")]
fn the_queue_holds_one(world: &ReportDispatchWorld, count: usize) {
    assert_queue_len(world, count);
}

#[then("the queue holds {count} messages")]
fn the_queue_holds_many(world: &ReportDispatchWorld, count: usize) {
    assert_queue_len(world, count);
}

fn assert_queue_len(world: &ReportDispatchWorld, count: usize) {
    let published = world.published();
    assert_eq!(published.len(), count);
    assert!(
        published
            .iter()
            .all(|(queue, _)| queue == REPORT_REQUESTS_QUEUE)
    );
}

#[then("the index holds {count} document")]
fn the_index_holds_one(world: &ReportDispatchWorld, count: usize) {
    assert_index_len(world, count);
}

#[then("the index holds {count} documents")]
fn the_index_holds_many(world: &ReportDispatchWorld, count: usize) {
    assert_index_len(world, count);
}

fn assert_index_len(world: &ReportDispatchWorld, count: usize) {
    let documents = world.index.get().expect("index wired").documents();
    assert_eq!(documents.len(), count);
    assert!(
        documents
            .iter()
            .all(|doc| doc.collection == REPORT_REQUESTS_COLLECTION)
    );
}

#[then("every queued message matches its indexed document")]
fn queued_messages_match_documents(world: &ReportDispatchWorld) {
    let documents = world.index.get().expect("index wired").documents();
    for (_, message) in world.published() {
        let id = message
            .get("id")
            .and_then(Value::as_str)
            .expect("message carries an id");
        let indexed = documents
            .iter()
            .find(|doc| doc.id == id)
            .expect("message was indexed");
        assert_eq!(indexed.document, message);
    }
}

#[then("every accepted request has a distinct identifier")]
fn accepted_requests_have_distinct_ids(world: &ReportDispatchWorld) {
    let mut ids: Vec<_> = world.accepted().into_iter().map(|r| r.id).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[then("the request fails as unavailable at the {stage} stage")]
fn the_request_fails_at_stage(world: &ReportDispatchWorld, stage: String) {
    let error = world.last_failure();
    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    let details = error.details().expect("failure details present");
    assert_eq!(details.get("stage").and_then(Value::as_str), Some(stage.as_str()));
}

#[then("the failure reports the job as queued")]
fn the_failure_reports_queued(world: &ReportDispatchWorld) {
    let error = world.last_failure();
    let details = error.details().expect("failure details present");
    assert_eq!(details.get("queued").and_then(Value::as_bool), Some(true));
    assert!(details.get("requestId").is_some_and(Value::is_string));
}

#[then("the failure reports the job as not queued")]
fn the_failure_reports_not_queued(world: &ReportDispatchWorld) {
    let error = world.last_failure();
    let details = error.details().expect("failure details present");
    assert_eq!(details.get("queued").and_then(Value::as_bool), Some(false));
    assert!(world.published().is_empty());
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(
    path = "tests/features/report_dispatch.feature",
    name = "A report request is queued and indexed"
)]
fn a_report_request_is_queued_and_indexed(world: ReportDispatchWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/report_dispatch.feature",
    name = "A report request without a location"
)]
fn a_report_request_without_a_location(world: ReportDispatchWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/report_dispatch.feature",
    name = "Identical requests are dispatched independently"
)]
fn identical_requests_are_dispatched_independently(world: ReportDispatchWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/report_dispatch.feature",
    name = "A queue outage prevents indexing"
)]
fn a_queue_outage_prevents_indexing(world: ReportDispatchWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/report_dispatch.feature",
    name = "An index outage leaves the job queued"
)]
fn an_index_outage_leaves_the_job_queued(world: ReportDispatchWorld) {
    let _ = world;
}
