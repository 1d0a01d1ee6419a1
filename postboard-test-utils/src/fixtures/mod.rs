//! Test fixture modules for database record creation.
//!
//! - `factory` - In-memory model instances that don't touch the database
//! - `message` - Message records
//! - `user` - Postboard user records

pub mod factory;
pub mod message;
pub mod user;
