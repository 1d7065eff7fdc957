//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::{ContactDraft, ContactId};
use crate::domain::Service;
use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path},
    http::{header, HeaderMap, StatusCode},
    Extension, Json,
};
use std::sync::Arc;

/// List all contacts
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    responses(
        (status = 200, description = "All contacts", body = ContactListResponse),
        (status = 400, description = "Store error", body = Problem),
    )
)]
pub async fn list_contacts(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<ContactListResponse>, Problem> {
    let contacts = service.list_contacts().await.map_err(map_domain_error)?;

    Ok(Json(ContactListResponse {
        data: contacts.into_iter().map(Into::into).collect(),
        message: "Get all contacts".to_string(),
    }))
}

/// Create a new contact
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Contact created", body = ContactResponse),
        (status = 400, description = "Missing fields or store error", body = Problem),
    )
)]
pub async fn create_contact(
    Extension(service): Extension<Arc<Service>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<ContactResponse>), Problem> {
    // A request without a JSON body supplies none of the fields
    let draft: ContactDraft = if body.is_empty() || !is_json(&headers) {
        ContactDraft::default()
    } else {
        let Json(req) = Json::<CreateContactRequest>::from_bytes(&body)?;
        req.into()
    };
    tracing::debug!(?draft, "create contact request");

    let contact = service
        .create_contact(draft)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            data: contact.into(),
            message: "create a new contact".to_string(),
        }),
    ))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| {
            let essence = essence.trim().to_ascii_lowercase();
            essence == "application/json" || essence.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Get a contact by id
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Contact found", body = ContactResponse),
        (status = 404, description = "Contact not found", body = Problem),
    )
)]
pub async fn get_contact(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> Result<Json<ContactResponse>, Problem> {
    let contact = service
        .get_contact(&ContactId::from(id.as_str()))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ContactResponse {
        data: contact.into(),
        message: format!("Get contacts for {}", id),
    }))
}

/// Update a contact by id
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "Contact identifier")),
    request_body = UpdateContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = ContactResponse),
        (status = 400, description = "Invalid body or store error", body = Problem),
        (status = 404, description = "Contact not found", body = Problem),
    )
)]
pub async fn update_contact(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, Problem> {
    let Json(req) = payload?;

    let contact = service
        .update_contact(&ContactId::from(id.as_str()), req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ContactResponse {
        data: contact.into(),
        message: format!("Update contacts for {}", id),
    }))
}

/// Delete a contact by id
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Contact deleted", body = MessageResponse),
        (status = 400, description = "Store error", body = Problem),
    )
)]
pub async fn delete_contact(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, Problem> {
    service
        .delete_contact(&ContactId::from(id.as_str()))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MessageResponse {
        message: format!("Delete contacts for {}", id),
    }))
}
