//! HTTP controller endpoints for the Postboard web API.
//!
//! Axum handlers for the message resource. Controllers extract request data, delegate to
//! the service layer, and return JSON responses. They are annotated with utoipa for
//! OpenAPI documentation.

pub mod message;
