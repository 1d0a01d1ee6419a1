//! Data transfer objects forming the public HTTP contract.

pub mod api;
pub mod message;
