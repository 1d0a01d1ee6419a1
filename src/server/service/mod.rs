//! Service layer for business logic.
//!
//! Services validate client input, enforce invariants spanning multiple repositories, and
//! translate database models into the DTOs returned by controllers.

pub mod message;
