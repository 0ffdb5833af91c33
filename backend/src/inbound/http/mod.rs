//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

use crate::domain::Error;

pub mod contacts;
pub mod error;
pub mod health;
pub mod hotels;
pub mod reports;
pub mod schemas;
pub mod state;
pub mod validation;

pub use crate::domain::ApiResult;

/// JSON extractor configuration returning domain validation errors.
///
/// Malformed bodies surface as `invalid_request` payloads carrying the
/// request's trace identifier rather than actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request("invalid request body")
            .with_details(serde_json::json!({ "reason": err.to_string() }))
            .into()
    })
}

/// Register every REST endpoint on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use hotel_service::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(hotels::find_hotels_by_location)
        .service(hotels::create_hotel)
        .service(hotels::get_hotel)
        .service(hotels::delete_hotel)
        .service(hotels::list_officials)
        .service(contacts::add_contact)
        .service(contacts::list_contacts)
        .service(contacts::delete_contact)
        .service(reports::request_report);
}
