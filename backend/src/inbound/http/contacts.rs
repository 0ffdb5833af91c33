//! Contact HTTP handlers nested under their hotel.
//!
//! ```text
//! POST   /hotels/{id}/contacts
//! GET    /hotels/{id}/contacts
//! DELETE /hotels/{id}/contacts/{contact_id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Contact, ContactDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ContactSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Request payload for attaching a contact. The hotel comes from the path.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddContactRequest {
    #[serde(rename = "type")]
    #[schema(example = "email")]
    pub contact_type: String,
    #[schema(example = "concierge@grandbudapest.example")]
    pub content: String,
}

/// Attach a contact to a hotel.
#[utoipa::path(
    post,
    path = "/hotels/{id}/contacts",
    params(("id" = String, Path, description = "Hotel identifier")),
    request_body = AddContactRequest,
    responses(
        (status = 201, description = "Contact created", body = ContactSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Hotel not found", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "addContact"
)]
#[post("/hotels/{id}/contacts")]
pub async fn add_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AddContactRequest>,
) -> ApiResult<HttpResponse> {
    let hotel_id = parse_uuid(&path.into_inner(), FieldName::new("id"))?;
    let AddContactRequest {
        contact_type,
        content,
    } = payload.into_inner();
    let contact = state
        .contacts
        .add_contact(ContactDraft {
            hotel_id,
            contact_type,
            content,
        })
        .await?;
    Ok(HttpResponse::Created().json(contact))
}

/// List the contacts of a hotel, oldest first.
#[utoipa::path(
    get,
    path = "/hotels/{id}/contacts",
    params(("id" = String, Path, description = "Hotel identifier")),
    responses(
        (status = 200, description = "Contacts of the hotel", body = Vec<ContactSchema>),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/hotels/{id}/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Contact>>> {
    let hotel_id = parse_uuid(&path.into_inner(), FieldName::new("id"))?;
    let contacts = state.contacts_query.list_contacts(hotel_id).await?;
    Ok(web::Json(contacts))
}

/// Delete a contact. Unknown identifiers also answer 204.
#[utoipa::path(
    delete,
    path = "/hotels/{id}/contacts/{contact_id}",
    params(
        ("id" = String, Path, description = "Hotel identifier"),
        ("contact_id" = String, Path, description = "Contact identifier")
    ),
    responses(
        (status = 204, description = "Contact deleted or already absent"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "deleteContact"
)]
#[delete("/hotels/{id}/contacts/{contact_id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (hotel_id, contact_id) = path.into_inner();
    parse_uuid(&hotel_id, FieldName::new("id"))?;
    let contact_id = parse_uuid(&contact_id, FieldName::new("contact_id"))?;
    state.contacts.delete_contact(contact_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use chrono::Utc;
    use rstest::rstest;
    use serde_json::{Value, json};
    use uuid::Uuid;

    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::{MockContactCommand, MockContactQuery};
    use crate::inbound::http::state::HttpStatePorts;

    fn state(contacts: MockContactCommand, contacts_query: MockContactQuery) -> HttpState {
        HttpState::new(HttpStatePorts {
            contacts: Arc::new(contacts),
            contacts_query: Arc::new(contacts_query),
            ..HttpStatePorts::default()
        })
    }

    #[rstest]
    #[actix_web::test]
    async fn add_contact_takes_hotel_from_path() {
        let hotel_id = Uuid::new_v4();
        let mut contacts = MockContactCommand::new();
        contacts
            .expect_add_contact()
            .withf(move |draft| draft.hotel_id == hotel_id && draft.contact_type == "email")
            .times(1)
            .return_once(|draft| Ok(Contact::from_draft(Uuid::new_v4(), draft, Utc::now())));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state(contacts, MockContactQuery::new())))
                .configure(crate::inbound::http::configure),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri(&format!("/hotels/{hotel_id}/contacts"))
            .set_json(json!({ "type": "email", "content": "desk@example.com" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["hotel_id"], json!(hotel_id.to_string()));
        assert_eq!(body["type"], json!("email"));
    }

    #[rstest]
    #[actix_web::test]
    async fn add_contact_for_unknown_hotel_is_not_found() {
        let mut contacts = MockContactCommand::new();
        contacts
            .expect_add_contact()
            .times(1)
            .return_once(|draft| Err(Error::not_found(format!("hotel {} not found", draft.hotel_id))));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state(contacts, MockContactQuery::new())))
                .configure(crate::inbound::http::configure),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri(&format!("/hotels/{}/contacts", Uuid::new_v4()))
            .set_json(json!({ "type": "phone", "content": "+1 555" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_contact_answers_no_content() {
        let contact_id = Uuid::new_v4();
        let mut contacts = MockContactCommand::new();
        contacts
            .expect_delete_contact()
            .withf(move |id| *id == contact_id)
            .times(1)
            .return_once(|_| Ok(()));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state(contacts, MockContactQuery::new())))
                .configure(crate::inbound::http::configure),
        )
        .await;

        let request = actix_test::TestRequest::delete()
            .uri(&format!("/hotels/{}/contacts/{contact_id}", Uuid::new_v4()))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[rstest]
    #[actix_web::test]
    async fn list_contacts_returns_array() {
        let mut query = MockContactQuery::new();
        query
            .expect_list_contacts()
            .times(1)
            .return_once(|_| Ok(Vec::new()));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state(MockContactCommand::new(), query)))
                .configure(crate::inbound::http::configure),
        )
        .await;

        let request = actix_test::TestRequest::get()
            .uri(&format!("/hotels/{}/contacts", Uuid::new_v4()))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!([]));
    }
}
