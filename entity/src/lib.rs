//! SeaORM entities for the Postboard schema.

pub mod prelude;

pub mod message;
pub mod postboard_user;
