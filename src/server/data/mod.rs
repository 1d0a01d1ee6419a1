//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. Each repository is
//! generic over [`sea_orm::ConnectionTrait`] so it can run against a plain connection or
//! inside a transaction.

pub mod message;
pub mod user;
