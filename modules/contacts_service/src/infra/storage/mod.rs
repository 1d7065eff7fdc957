//! Storage layer - store client implementations and their wire rows

pub mod entity;
pub mod mapper;
pub mod memory;
pub mod rest;

pub use memory::InMemoryContactStore;
pub use rest::RestContactStore;
