//! OpenAPI document for the contacts API

use super::{dto::*, error::Problem, handlers, health};
use axum::Json;
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/api-doc/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Contacts Service", description = "CRUD over the contacts table"),
    paths(
        handlers::list_contacts,
        handlers::create_contact,
        handlers::get_contact,
        handlers::update_contact,
        handlers::delete_contact,
        health::health_handler,
    ),
    components(schemas(
        ContactDto,
        CreateContactRequest,
        UpdateContactRequest,
        ContactResponse,
        ContactListResponse,
        MessageResponse,
        Problem,
    )),
    tags(
        (name = "contacts", description = "Contacts CRUD"),
        (name = "health", description = "Liveness probe"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
