//! REST API layer

pub mod dto;
pub mod error;
pub mod handlers;
pub mod health;
pub mod mapper;
pub mod openapi;
pub mod routes;

pub use routes::{build_router, register_routes, CONTACTS_PATH};
