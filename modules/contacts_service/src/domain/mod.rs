//! Domain layer - business logic and the store seam

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{ContactStore, StoreError};
pub use service::Service;
