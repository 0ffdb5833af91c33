//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ServerConfig, ServiceSettings};

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use hotel_service::Trace;
#[cfg(debug_assertions)]
use hotel_service::doc::ApiDoc;
use hotel_service::inbound::http::configure;
use hotel_service::inbound::http::health::{HealthState, live, ready};
use hotel_service::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Without a pool, hotels and contacts are kept in memory. A missing queue or
/// index is replaced by a stub only when `config` allows stubs.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use hotel_service::domain::TRACE_ID_HEADER;
    use hotel_service::inbound::http::state::HttpStatePorts;
    use rstest::rstest;

    #[rstest]
    #[actix_web::test]
    async fn app_serves_probes_and_routes_with_trace_header() {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let state = web::Data::new(HttpState::new(HttpStatePorts::default()));
        let app = actix_test::init_service(build_app(health, state)).await;

        let readiness = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(readiness.status(), StatusCode::OK);

        let accepted = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/reports/request")
                .set_json(serde_json::json!({ "location": "Paris" }))
                .to_request(),
        )
        .await;
        assert_eq!(accepted.status(), StatusCode::ACCEPTED);
        assert!(accepted.headers().contains_key(TRACE_ID_HEADER));
    }

    fn unconfigured_state() -> web::Data<HttpState> {
        build_http_state(&ServerConfig::new(std::net::SocketAddr::from((
            [127, 0, 0, 1],
            0,
        ))))
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_hotel_is_not_found_without_a_database() {
        let app = actix_test::init_service(build_app(
            web::Data::new(HealthState::new()),
            unconfigured_state(),
        ))
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/hotels/{}", uuid::Uuid::new_v4()))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[actix_web::test]
    async fn report_request_is_not_accepted_without_a_broker() {
        let app = actix_test::init_service(build_app(
            web::Data::new(HealthState::new()),
            unconfigured_state(),
        ))
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/reports/request")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
