//! Tests for `DELETE /messages/{id}`.

use postboard::model::message::MESSAGE_DELETED;

use super::*;

/// Tests deleting the seeded message.
///
/// Expected: 200 OK with the confirmation & deleted ID, and the message gone from the database
#[tokio::test]
async fn deletes_message() -> Result<(), TestError> {
    let mut test = seeded().await?;
    let agent = test.agent();

    let resp = agent
        .delete(&format!("/messages/{}", TEST_MESSAGE_ID_1))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["message"], "Message Successfully deleted.");
    assert_eq!(body["message"], MESSAGE_DELETED);
    assert_eq!(body["_id"], TEST_MESSAGE_ID_1);

    let stored = test.message().get(TEST_MESSAGE_ID_1).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting the same message twice.
///
/// Expected: 200 OK the first time, 404 NOT_FOUND the second
#[tokio::test]
async fn not_found_when_already_deleted() -> Result<(), TestError> {
    let test = seeded().await?;
    let agent = test.agent();
    let path = format!("/messages/{}", TEST_MESSAGE_ID_1);

    agent.delete(&path).await.assert_status_ok();
    let resp = agent.delete(&path).await;

    resp.assert_status(StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that deleting one message leaves the others and the author in place.
///
/// Expected: 200 OK and the second message still listed
#[tokio::test]
async fn keeps_other_messages() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_message_tables()
        .with_mock_user()
        .with_mock_message()
        .with_message(TEST_MESSAGE_ID_2, "titletest2", "bodytest2", TEST_AUTHOR_ID)
        .build()
        .await?;
    let agent = test.agent();

    agent
        .delete(&format!("/messages/{}", TEST_MESSAGE_ID_1))
        .await
        .assert_status_ok();

    let resp = agent.get("/messages").await;
    let body: Value = resp.json();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["_id"], TEST_MESSAGE_ID_2);
    assert!(test.user().get(TEST_AUTHOR_ID).await?.is_some());

    Ok(())
}

/// Tests deleting with an ID that is not 24 hex characters.
///
/// Expected: 400 BAD_REQUEST and the seeded message untouched
#[tokio::test]
async fn bad_request_for_malformed_id() -> Result<(), TestError> {
    let mut test = seeded().await?;
    let agent = test.agent();

    let resp = agent.delete("/messages/zzzz").await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(test.message().count().await?, 1);

    Ok(())
}
