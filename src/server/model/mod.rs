//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to every HTTP handler and
//! type aliases for the SeaORM models used across repositories and services.

pub mod app;
pub mod db;
