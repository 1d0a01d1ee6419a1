//! Utility functions and helpers for server operations.
//!
//! Currently provides generation and validation of the 24 character hex identifiers used
//! as primary keys for users and messages.

pub mod id;
