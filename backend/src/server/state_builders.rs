//! Builders for HTTP state ports from the configured adapters.

use std::sync::Arc;

use actix_web::web;

use hotel_service::domain::ports::{
    ContactCommand, ContactQuery, HotelCommand, HotelQuery, ReportQueue, ReportRequestCommand,
    SearchIndex,
};
use hotel_service::domain::{ContactService, HotelService, ReportDispatcher};
use hotel_service::inbound::http::state::{HttpState, HttpStatePorts};
use hotel_service::outbound::persistence::{
    DbPool, DieselContactRepository, DieselHotelRepository, InMemoryDirectory,
};
use hotel_service::outbound::queue::{StubReportQueue, UnconfiguredReportQueue};
use hotel_service::outbound::search::{StubSearchIndex, UnconfiguredSearchIndex};
use tracing::warn;

use super::ServerConfig;

/// Build a command/query service pair using real services when a pool is
/// available, otherwise using the supplied fallback pair.
fn build_service_pair<Pool, S, Cmd, Query, MakeService, Cast>(
    pool: &Option<Pool>,
    make_service: MakeService,
    fallback: (Arc<Cmd>, Arc<Query>),
    cast: Cast,
) -> (Arc<Cmd>, Arc<Query>)
where
    S: 'static,
    Cmd: ?Sized + 'static,
    Query: ?Sized + 'static,
    MakeService: FnOnce(&Pool) -> S,
    Cast: FnOnce(Arc<S>) -> (Arc<Cmd>, Arc<Query>),
{
    match pool {
        Some(pool) => {
            let service = Arc::new(make_service(pool));
            cast(service)
        }
        None => fallback,
    }
}

fn build_hotels_pair(
    pool: &Option<DbPool>,
    directory: &Arc<InMemoryDirectory>,
) -> (Arc<dyn HotelCommand>, Arc<dyn HotelQuery>) {
    let in_memory = Arc::new(HotelService::new(
        Arc::clone(directory),
        Arc::new(mockable::DefaultClock),
    ));
    build_service_pair(
        pool,
        |pool| {
            HotelService::new(
                Arc::new(DieselHotelRepository::new(pool.clone())),
                Arc::new(mockable::DefaultClock),
            )
        },
        (
            in_memory.clone() as Arc<dyn HotelCommand>,
            in_memory as Arc<dyn HotelQuery>,
        ),
        |service| {
            (
                service.clone() as Arc<dyn HotelCommand>,
                service as Arc<dyn HotelQuery>,
            )
        },
    )
}

fn build_contacts_pair(
    pool: &Option<DbPool>,
    directory: &Arc<InMemoryDirectory>,
) -> (Arc<dyn ContactCommand>, Arc<dyn ContactQuery>) {
    let in_memory = Arc::new(ContactService::new(
        Arc::clone(directory),
        Arc::new(mockable::DefaultClock),
    ));
    build_service_pair(
        pool,
        |pool| {
            ContactService::new(
                Arc::new(DieselContactRepository::new(pool.clone())),
                Arc::new(mockable::DefaultClock),
            )
        },
        (
            in_memory.clone() as Arc<dyn ContactCommand>,
            in_memory as Arc<dyn ContactQuery>,
        ),
        |service| {
            (
                service.clone() as Arc<dyn ContactCommand>,
                service as Arc<dyn ContactQuery>,
            )
        },
    )
}

/// Build the report dispatcher over the configured queue and index.
///
/// A missing adapter is replaced by a discarding stub when `allow_stubs` is
/// set and by one that fails every call otherwise.
fn build_report_dispatcher(
    queue: Option<Arc<dyn ReportQueue>>,
    index: Option<Arc<dyn SearchIndex>>,
    allow_stubs: bool,
) -> Arc<dyn ReportRequestCommand> {
    let queue = queue.unwrap_or_else(|| -> Arc<dyn ReportQueue> {
        if allow_stubs {
            warn!("report queue stubbed; report requests are discarded");
            Arc::new(StubReportQueue)
        } else {
            Arc::new(UnconfiguredReportQueue)
        }
    });
    let index = index.unwrap_or_else(|| -> Arc<dyn SearchIndex> {
        if allow_stubs {
            warn!("search index stubbed; report requests are not indexed");
            Arc::new(StubSearchIndex)
        } else {
            Arc::new(UnconfiguredSearchIndex)
        }
    });
    Arc::new(ReportDispatcher::new(queue, index))
}

/// Build the shared HTTP state from configured adapters and fallbacks.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let directory = Arc::new(InMemoryDirectory::new());
    let (hotels, hotels_query) = build_hotels_pair(&config.db_pool, &directory);
    let (contacts, contacts_query) = build_contacts_pair(&config.db_pool, &directory);
    let reports = build_report_dispatcher(
        config.report_queue.clone(),
        config.search_index.clone(),
        config.allow_stubs,
    );

    web::Data::new(HttpState::new(HttpStatePorts {
        hotels,
        hotels_query,
        contacts,
        contacts_query,
        reports,
    }))
}
