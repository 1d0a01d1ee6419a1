//! Tests for `GET /messages/{id}`.

use super::*;

/// Tests retrieving the seeded message by ID.
///
/// Expected: 200 OK with the seeded title & body at the top level of the body
#[tokio::test]
async fn returns_seeded_message() -> Result<(), TestError> {
    let test = seeded().await?;
    let agent = test.agent();

    let resp = agent.get(&format!("/messages/{}", TEST_MESSAGE_ID_1)).await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["title"], TEST_TITLE_1);
    assert_eq!(body["body"], TEST_BODY_1);
    assert_eq!(body["_id"], TEST_MESSAGE_ID_1);
    // No envelope around the message
    assert!(body.get("message").is_none());

    Ok(())
}

/// Tests retrieving a well-formed ID with no stored message.
///
/// Expected: 404 NOT_FOUND with an error body
#[tokio::test]
async fn not_found_for_unknown_id() -> Result<(), TestError> {
    let test = seeded().await?;
    let agent = test.agent();

    let resp = agent.get(&format!("/messages/{}", TEST_MESSAGE_ID_2)).await;

    resp.assert_status(StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert!(body["error"].is_string());

    Ok(())
}

/// Tests retrieving a message with an ID that is not 24 hex characters.
///
/// Expected: 400 BAD_REQUEST
#[tokio::test]
async fn bad_request_for_malformed_id() -> Result<(), TestError> {
    let test = seeded().await?;
    let agent = test.agent();

    let resp = agent.get("/messages/not-a-message-id").await;

    resp.assert_status(StatusCode::BAD_REQUEST);

    Ok(())
}
