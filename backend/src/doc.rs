//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint from the inbound layer together
//! with the schema wrappers in [`crate::inbound::http::schemas`]. The document
//! backs Swagger UI in debug builds and is printed by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::contacts::AddContactRequest;
use crate::inbound::http::schemas::{
    ContactSchema, ErrorCodeSchema, ErrorSchema, HotelDraftSchema, HotelOfficialsSchema,
    HotelSchema, ReportRequestDraftSchema, ReportRequestSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel service API",
        description = "Hotel and contact directory with asynchronous report requests."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::hotels::create_hotel,
        crate::inbound::http::hotels::find_hotels_by_location,
        crate::inbound::http::hotels::get_hotel,
        crate::inbound::http::hotels::delete_hotel,
        crate::inbound::http::hotels::list_officials,
        crate::inbound::http::contacts::add_contact,
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::delete_contact,
        crate::inbound::http::reports::request_report,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        HotelSchema,
        HotelDraftSchema,
        HotelOfficialsSchema,
        ContactSchema,
        AddContactRequest,
        ReportRequestSchema,
        ReportRequestDraftSchema,
    )),
    tags(
        (name = "hotels", description = "Hotel records and their officials"),
        (name = "contacts", description = "Contacts attached to hotels"),
        (name = "reports", description = "Asynchronous report requests"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("crate.domain.Error", "code")]
    #[case("crate.domain.Hotel", "company_title")]
    #[case("crate.domain.Contact", "type")]
    #[case("crate.domain.ReportRequest", "status")]
    fn registered_schema_has_field(#[case] name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        assert_object_schema_has_field(schema, field);
    }

    #[rstest]
    #[case("/hotels")]
    #[case("/hotels/{id}/officials")]
    #[case("/hotels/{id}/contacts/{contact_id}")]
    #[case("/reports/request")]
    fn document_lists_endpoint(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
