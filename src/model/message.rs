use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Confirmation returned in the body of a successful message deletion
pub static MESSAGE_DELETED: &str = "Message Successfully deleted.";

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub body: String,
    /// ID of the user who wrote the message
    pub author: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageListDto {
    pub messages: Vec<MessageDto>,
}

/// Request body for creating a message
///
/// The ID is optional, a new one is generated when the caller doesn't provide it.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateMessageDto {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub body: String,
    pub author: String,
}

/// Request body for updating a message, fields left out keep their current value
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateMessageDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatedMessageDto {
    pub message: MessageDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeletedMessageDto {
    /// Always [`MESSAGE_DELETED`]
    pub message: String,
    #[serde(rename = "_id")]
    pub id: String,
}
