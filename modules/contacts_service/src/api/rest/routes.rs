//! Route registration

use super::{handlers, health, openapi};
use crate::domain::Service;
use axum::{
    body::Body,
    http::Request,
    routing::get,
    Extension, Router,
};
use std::sync::Arc;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// Collection path of the contacts resource
pub const CONTACTS_PATH: &str = "/api/contacts";

/// Register the five contact routes on `router`
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let contacts = Router::new()
        .route(
            CONTACTS_PATH,
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            &format!("{}/{{id}}", CONTACTS_PATH),
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .layer(Extension(service));

    router.merge(contacts)
}

/// Full application router: contacts, health, OpenAPI document and request tracing
pub fn build_router(service: Arc<Service>) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        tracing::info_span!(
            "http.request",
            request_id = %request_id,
            method = %request.method(),
            route = %request.uri().path(),
        )
    });

    register_routes(Router::new(), service)
        .merge(health::router())
        .route(openapi::OPENAPI_PATH, get(openapi::openapi_json))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(trace)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
