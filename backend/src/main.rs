//! Service entry-point: loads settings, connects adapters and serves HTTP.

mod server;

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use hotel_service::domain::REPORT_REQUESTS_QUEUE;
use hotel_service::inbound::http::health::HealthState;
use hotel_service::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use hotel_service::outbound::queue::{AmqpConfig, AmqpReportQueue};
use hotel_service::outbound::search::ElasticsearchIndex;

use server::{ServerConfig, ServiceSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    settings.require_adapters().map_err(io::Error::other)?;

    if settings.run_migrations {
        match settings.database_url.clone() {
            Some(database_url) => run_pending_migrations(database_url)
                .await
                .map_err(|e| io::Error::other(e.to_string()))?,
            None => warn!("migrations requested but HOTEL_DATABASE_URL is not set"),
        }
    }

    let config = build_server_config(&settings).await?;
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}

/// Connect every configured adapter and attach it to the server configuration.
async fn build_server_config(settings: &ServiceSettings) -> io::Result<ServerConfig> {
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| io::Error::other(format!("invalid bind address: {e}")))?;
    info!(%bind_addr, "configuring HTTP server");
    let mut config = ServerConfig::new(bind_addr).with_stub_adapters(settings.allow_stubs);

    match &settings.database_url {
        Some(database_url) => {
            let pool = DbPool::new(PoolConfig::new(database_url.as_str()))
                .await
                .map_err(|e| io::Error::other(e.to_string()))?;
            config = config.with_db_pool(pool);
        }
        None => warn!("HOTEL_DATABASE_URL not set; hotels and contacts are kept in memory"),
    }

    match &settings.rabbitmq_url {
        Some(rabbitmq_url) => {
            let queue =
                AmqpReportQueue::connect(AmqpConfig::new(rabbitmq_url.as_str()), &[REPORT_REQUESTS_QUEUE])
                    .await
                    .map_err(|e| io::Error::other(e.to_string()))?;
            config = config.with_report_queue(Arc::new(queue));
        }
        None => warn!("HOTEL_RABBITMQ_URL not set; report requests will be discarded"),
    }

    match &settings.elasticsearch_url {
        Some(elasticsearch_url) => {
            let base_url = Url::parse(elasticsearch_url)
                .map_err(|e| io::Error::other(format!("invalid search URL: {e}")))?;
            let index = ElasticsearchIndex::new(base_url, settings.search_timeout())
                .map_err(|e| io::Error::other(e.to_string()))?;
            config = config.with_search_index(Arc::new(index));
        }
        None => warn!("HOTEL_ELASTICSEARCH_URL not set; report requests will not be indexed"),
    }

    Ok(config)
}
