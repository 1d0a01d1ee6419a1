//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /messages` - List all messages
/// - `POST /messages` - Create a message
/// - `GET /messages/{id}` - Get a single message
/// - `PUT /messages/{id}` - Update a message
/// - `DELETE /messages/{id}` - Delete a message
///
/// The OpenAPI specification is served at `/docs/openapi.json` and Swagger UI at `/docs`.
///
/// # Returns
/// An Axum `Router<AppState>`, call `with_state` to make it servable.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Postboard", description = "Postboard API"), tags(
        (name = controller::message::MESSAGE_TAG, description = "Message API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::message::list_messages,
            controller::message::create_message
        ))
        .routes(routes!(
            controller::message::get_message,
            controller::message::update_message,
            controller::message::delete_message
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}
