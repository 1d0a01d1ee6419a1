use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        message::{
            CreateMessageDto, DeletedMessageDto, MessageDto, MessageListDto, UpdateMessageDto,
            UpdatedMessageDto,
        },
    },
    server::{error::Error, model::app::AppState, service::message::MessageService},
};

pub static MESSAGE_TAG: &str = "message";

/// List all messages
///
/// # Responses
/// - 200 (Success): All messages wrapped in a `messages` field, oldest first
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/messages",
    tag = MESSAGE_TAG,
    responses(
        (status = 200, description = "Success when listing messages", body = MessageListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_messages(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let message_service = MessageService::new(&state.db);

    let messages = message_service.list_messages().await?;

    Ok((StatusCode::OK, Json(MessageListDto { messages })))
}

/// Get a single message
///
/// # Responses
/// - 200 (Success): The message, without an envelope
/// - 400 (Bad Request): Malformed message ID
/// - 404 (Not Found): No message with that ID
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/messages/{id}",
    tag = MESSAGE_TAG,
    params(("id" = String, Path, description = "24 character hex message ID")),
    responses(
        (status = 200, description = "Success when retrieving message", body = MessageDto),
        (status = 400, description = "Malformed message ID", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let message_service = MessageService::new(&state.db);

    let message = message_service.get_message(&message_id).await?;

    Ok((StatusCode::OK, Json(message)))
}

/// Create a message
///
/// # Responses
/// - 200 (Success): The created message
/// - 400 (Bad Request): Malformed ID, empty field, or author does not exist
/// - 409 (Conflict): A message with the provided ID already exists
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    post,
    path = "/messages",
    tag = MESSAGE_TAG,
    request_body = CreateMessageDto,
    responses(
        (status = 200, description = "Success when creating message", body = MessageDto),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 409, description = "Message ID already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_message(
    State(state): State<AppState>,
    Json(payload): Json<CreateMessageDto>,
) -> Result<impl IntoResponse, Error> {
    let message_service = MessageService::new(&state.db);

    let message = message_service.create_message(payload).await?;

    Ok((StatusCode::OK, Json(message)))
}

/// Update the title and/or body of a message
///
/// # Responses
/// - 200 (Success): The updated message wrapped in a `message` field
/// - 400 (Bad Request): Malformed message ID or empty field
/// - 404 (Not Found): No message with that ID
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    put,
    path = "/messages/{id}",
    tag = MESSAGE_TAG,
    params(("id" = String, Path, description = "24 character hex message ID")),
    request_body = UpdateMessageDto,
    responses(
        (status = 200, description = "Success when updating message", body = UpdatedMessageDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    Json(payload): Json<UpdateMessageDto>,
) -> Result<impl IntoResponse, Error> {
    let message_service = MessageService::new(&state.db);

    let message = message_service
        .update_message(&message_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(UpdatedMessageDto { message })))
}

/// Delete a message
///
/// # Responses
/// - 200 (Success): Confirmation message and the deleted ID
/// - 400 (Bad Request): Malformed message ID
/// - 404 (Not Found): No message with that ID
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    delete,
    path = "/messages/{id}",
    tag = MESSAGE_TAG,
    params(("id" = String, Path, description = "24 character hex message ID")),
    responses(
        (status = 200, description = "Success when deleting message", body = DeletedMessageDto),
        (status = 400, description = "Malformed message ID", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let message_service = MessageService::new(&state.db);

    let deleted = message_service.delete_message(&message_id).await?;

    Ok((StatusCode::OK, Json(deleted)))
}
