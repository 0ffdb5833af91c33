//! Hotel HTTP handlers.
//!
//! ```text
//! POST   /hotels
//! GET    /hotels?location=
//! GET    /hotels/{id}
//! DELETE /hotels/{id}
//! GET    /hotels/{id}/officials
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Hotel, HotelDraft, HotelOfficials};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ErrorSchema, HotelDraftSchema, HotelOfficialsSchema, HotelSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, parse_uuid};

/// Query string for hotel search.
#[derive(Debug, Deserialize, IntoParams)]
pub struct LocationQuery {
    /// Exact location to match.
    pub location: Option<String>,
}

/// Create a hotel. Identity and timestamps are assigned by the service.
#[utoipa::path(
    post,
    path = "/hotels",
    request_body = HotelDraftSchema,
    responses(
        (status = 201, description = "Hotel created", body = HotelSchema),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["hotels"],
    operation_id = "createHotel"
)]
#[post("/hotels")]
pub async fn create_hotel(
    state: web::Data<HttpState>,
    payload: web::Json<HotelDraft>,
) -> ApiResult<HttpResponse> {
    let hotel = state.hotels.create_hotel(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(hotel))
}

/// List hotels at a location.
#[utoipa::path(
    get,
    path = "/hotels",
    params(LocationQuery),
    responses(
        (status = 200, description = "Hotels at the location", body = Vec<HotelSchema>),
        (status = 400, description = "Missing location", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["hotels"],
    operation_id = "findHotelsByLocation"
)]
#[get("/hotels")]
pub async fn find_hotels_by_location(
    state: web::Data<HttpState>,
    query: web::Query<LocationQuery>,
) -> ApiResult<web::Json<Vec<Hotel>>> {
    let location = query
        .into_inner()
        .location
        .ok_or_else(|| missing_field_error(FieldName::new("location")))?;
    let hotels = state.hotels_query.find_by_location(location).await?;
    Ok(web::Json(hotels))
}

/// Fetch one hotel.
#[utoipa::path(
    get,
    path = "/hotels/{id}",
    params(("id" = String, Path, description = "Hotel identifier")),
    responses(
        (status = 200, description = "Hotel details", body = HotelSchema),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Hotel not found", body = ErrorSchema)
    ),
    tags = ["hotels"],
    operation_id = "getHotel"
)]
#[get("/hotels/{id}")]
pub async fn get_hotel(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Hotel>> {
    let id = parse_uuid(&path.into_inner(), FieldName::new("id"))?;
    let hotel = state.hotels_query.get_hotel(id).await?;
    Ok(web::Json(hotel))
}

/// Delete a hotel. Unknown identifiers also answer 204.
#[utoipa::path(
    delete,
    path = "/hotels/{id}",
    params(("id" = String, Path, description = "Hotel identifier")),
    responses(
        (status = 204, description = "Hotel deleted or already absent"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["hotels"],
    operation_id = "deleteHotel"
)]
#[delete("/hotels/{id}")]
pub async fn delete_hotel(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_uuid(&path.into_inner(), FieldName::new("id"))?;
    state.hotels.delete_hotel(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Officials projection of a hotel.
#[utoipa::path(
    get,
    path = "/hotels/{id}/officials",
    params(("id" = String, Path, description = "Hotel identifier")),
    responses(
        (status = 200, description = "Hotel officials", body = HotelOfficialsSchema),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Hotel not found", body = ErrorSchema)
    ),
    tags = ["hotels"],
    operation_id = "listOfficials"
)]
#[get("/hotels/{id}/officials")]
pub async fn list_officials(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<HotelOfficials>> {
    let id = parse_uuid(&path.into_inner(), FieldName::new("id"))?;
    let officials = state.hotels_query.list_officials(id).await?;
    Ok(web::Json(officials))
}

#[cfg(test)]
#[path = "hotels_tests.rs"]
mod tests;
