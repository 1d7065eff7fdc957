//! Infrastructure layer - store clients

pub mod storage;
