//! Service settings and the HTTP server configuration object.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use hotel_service::domain::ports::{ReportQueue, SearchIndex};
use hotel_service::outbound::persistence::DbPool;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

/// Settings loaded via OrthoConfig from `HOTEL_*` environment variables,
/// command-line flags and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HOTEL")]
pub struct ServiceSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// RabbitMQ connection URL.
    pub rabbitmq_url: Option<String>,
    /// Elasticsearch base URL.
    pub elasticsearch_url: Option<String>,
    /// Start without the back ends above, storing hotels in memory and
    /// discarding report requests. Development only.
    #[ortho_config(default = false)]
    pub allow_stubs: bool,
    /// Apply embedded migrations before binding.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
    /// Timeout for search index requests, in seconds.
    pub search_timeout_secs: Option<u64>,
}

impl ServiceSettings {
    /// Socket address to bind, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let host: IpAddr = self.host.as_deref().unwrap_or(DEFAULT_HOST).parse()?;
        Ok(SocketAddr::new(host, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Environment variables naming back ends that are not configured.
    pub fn missing_adapters(&self) -> Vec<&'static str> {
        [
            ("HOTEL_DATABASE_URL", self.database_url.is_none()),
            ("HOTEL_RABBITMQ_URL", self.rabbitmq_url.is_none()),
            ("HOTEL_ELASTICSEARCH_URL", self.elasticsearch_url.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }

    /// Refuse to run without every back end unless stubs are allowed.
    ///
    /// # Errors
    /// Returns [`MissingAdapters`] naming the unset variables.
    pub fn require_adapters(&self) -> Result<(), MissingAdapters> {
        let missing = self.missing_adapters();
        if missing.is_empty() || self.allow_stubs {
            Ok(())
        } else {
            Err(MissingAdapters(missing))
        }
    }

    /// Search request timeout, falling back to ten seconds.
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(
            self.search_timeout_secs
                .unwrap_or(DEFAULT_SEARCH_TIMEOUT_SECS),
        )
    }
}

/// Back ends required to serve traffic that were left unset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} must be set (or set HOTEL_ALLOW_STUBS=true for development)", .0.join(", "))]
pub struct MissingAdapters(pub Vec<&'static str>);

/// Builder-style configuration for creating the HTTP server.
///
/// Without a pool, hotels and contacts live in memory. A missing queue or
/// index fails every report request unless stub adapters are allowed, in
/// which case requests are accepted and discarded.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) report_queue: Option<Arc<dyn ReportQueue>>,
    pub(crate) search_index: Option<Arc<dyn SearchIndex>>,
    pub(crate) allow_stubs: bool,
}

impl ServerConfig {
    /// Construct a configuration binding `bind_addr` with no adapters attached.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            report_queue: None,
            search_index: None,
            allow_stubs: false,
        }
    }

    /// Attach a database connection pool for the hotel and contact repositories.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Attach the queue report requests are published to.
    #[must_use]
    pub fn with_report_queue(mut self, queue: Arc<dyn ReportQueue>) -> Self {
        self.report_queue = Some(queue);
        self
    }

    /// Attach the index report requests are written to.
    #[must_use]
    pub fn with_search_index(mut self, index: Arc<dyn SearchIndex>) -> Self {
        self.search_index = Some(index);
        self
    }

    /// Accept and discard report requests when the queue or index is unset.
    #[must_use]
    pub fn with_stub_adapters(mut self, allow: bool) -> Self {
        self.allow_stubs = allow;
        self
    }
}
