//! Tests for `POST /messages`.

use super::*;

/// Tests creating a message with a caller-provided ID.
///
/// Expected: 200 OK echoing the title & body, and the same values persisted under that ID
#[tokio::test]
async fn creates_message() -> Result<(), TestError> {
    let mut test = seeded().await?;
    let agent = test.agent();

    let resp = agent
        .post("/messages")
        .json(&json!({
            "title": "titletest2",
            "body": "bodytest2",
            "author": TEST_AUTHOR_ID,
            "id": TEST_MESSAGE_ID_2,
        }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["title"], "titletest2");
    assert_eq!(body["body"], "bodytest2");
    assert_eq!(body["_id"], TEST_MESSAGE_ID_2);

    let stored = test
        .message()
        .get(TEST_MESSAGE_ID_2)
        .await?
        .expect("message should be persisted");
    assert_eq!(stored.title, "titletest2");
    assert_eq!(stored.body, "bodytest2");
    assert_eq!(stored.author_id, TEST_AUTHOR_ID);
    assert_eq!(test.message().count().await?, 2);

    Ok(())
}

/// Tests creating a message with the ID under `_id`.
///
/// Expected: 200 OK and the message persisted under that ID
#[tokio::test]
async fn accepts_underscore_id() -> Result<(), TestError> {
    let mut test = seeded().await?;
    let agent = test.agent();

    let resp = agent
        .post("/messages")
        .json(&json!({
            "title": "titletest2",
            "body": "bodytest2",
            "author": TEST_AUTHOR_ID,
            "_id": TEST_MESSAGE_ID_2,
        }))
        .await;

    resp.assert_status_ok();
    assert!(test.message().get(TEST_MESSAGE_ID_2).await?.is_some());

    Ok(())
}

/// Tests creating a message without an ID.
///
/// Expected: 200 OK with a generated ID that resolves in the database
#[tokio::test]
async fn generates_id_when_missing() -> Result<(), TestError> {
    let mut test = seeded().await?;
    let agent = test.agent();

    let resp = agent
        .post("/messages")
        .json(&json!({
            "title": "titletest2",
            "body": "bodytest2",
            "author": TEST_AUTHOR_ID,
        }))
        .await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    let id = body["_id"].as_str().expect("_id should be a string");
    assert_eq!(id.len(), 24);
    let stored = test.message().get(id).await?;
    assert!(matches!(stored, Some(ref m) if m.title == "titletest2"));

    Ok(())
}

/// Tests creating a message with an ID that is already taken.
///
/// Expected: 409 CONFLICT and the stored message unchanged
#[tokio::test]
async fn conflict_for_existing_id() -> Result<(), TestError> {
    let mut test = seeded().await?;
    let agent = test.agent();

    let resp = agent
        .post("/messages")
        .json(&json!({
            "title": "titletest2",
            "body": "bodytest2",
            "author": TEST_AUTHOR_ID,
            "id": TEST_MESSAGE_ID_1,
        }))
        .await;

    resp.assert_status(StatusCode::CONFLICT);
    let stored = test.message().get(TEST_MESSAGE_ID_1).await?.unwrap();
    assert_eq!(stored.title, TEST_TITLE_1);
    assert_eq!(stored.body, TEST_BODY_1);

    Ok(())
}

/// Tests creating a message whose author does not exist.
///
/// Expected: 400 BAD_REQUEST and nothing persisted
#[tokio::test]
async fn bad_request_for_unknown_author() -> Result<(), TestError> {
    let mut test = seeded().await?;
    let agent = test.agent();

    let resp = agent
        .post("/messages")
        .json(&json!({
            "title": "titletest2",
            "body": "bodytest2",
            "author": "602f41eb0937edf298486ac5",
            "id": TEST_MESSAGE_ID_2,
        }))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert!(test.message().get(TEST_MESSAGE_ID_2).await?.is_none());
    assert_eq!(test.message().count().await?, 1);

    Ok(())
}

/// Tests creating a message with an empty title.
///
/// Expected: 400 BAD_REQUEST
#[tokio::test]
async fn bad_request_for_empty_title() -> Result<(), TestError> {
    let mut test = seeded().await?;
    let agent = test.agent();

    let resp = agent
        .post("/messages")
        .json(&json!({
            "title": "",
            "body": "bodytest2",
            "author": TEST_AUTHOR_ID,
        }))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(test.message().count().await?, 1);

    Ok(())
}

/// Tests creating a message with a required field missing from the JSON body.
///
/// Expected: 422 UNPROCESSABLE_ENTITY
#[tokio::test]
async fn unprocessable_for_missing_field() -> Result<(), TestError> {
    let test = seeded().await?;
    let agent = test.agent();

    let resp = agent
        .post("/messages")
        .json(&json!({
            "title": "titletest2",
            "author": TEST_AUTHOR_ID,
        }))
        .await;

    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
