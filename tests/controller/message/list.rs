//! Tests for `GET /messages`.

use super::*;

/// Tests listing the seeded message.
///
/// Expected: 200 OK with a `messages` list holding exactly the seeded message
#[tokio::test]
async fn lists_seeded_message() -> Result<(), TestError> {
    let test = seeded().await?;
    let agent = test.agent();

    let resp = agent.get("/messages").await;

    resp.assert_status_ok();
    let body: Value = resp.json();
    let messages = body["messages"].as_array().expect("messages should be a list");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["_id"], TEST_MESSAGE_ID_1);
    assert_eq!(messages[0]["title"], TEST_TITLE_1);
    assert_eq!(messages[0]["body"], TEST_BODY_1);
    assert_eq!(messages[0]["author"], TEST_AUTHOR_ID);

    Ok(())
}

/// Tests that the list length always matches the number of stored messages.
///
/// Expected: 200 OK with N messages for N seeded messages
#[tokio::test]
async fn list_length_matches_seeded_count() -> Result<(), TestError> {
    for count in 0..=3u8 {
        let mut builder = TestBuilder::new().with_message_tables().with_mock_user();
        for n in 0..count {
            let id = format!("602f41f17f3cb147b7c5a3{:02x}", n);
            builder = builder.with_message(&id, &format!("title{}", n), "body", TEST_AUTHOR_ID);
        }
        let test = builder.build().await?;
        let agent = test.agent();

        let resp = agent.get("/messages").await;

        resp.assert_status_ok();
        let body: Value = resp.json();
        assert_eq!(
            body["messages"].as_array().map(Vec::len),
            Some(count as usize),
            "expected {} messages",
            count
        );
    }

    Ok(())
}

/// Tests that store failures are reported without leaking details.
///
/// Expected: 500 INTERNAL_SERVER_ERROR with a generic error body
#[tokio::test]
async fn internal_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let agent = test.agent();

    let resp = agent.get("/messages").await;

    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json();
    assert_eq!(body["error"], "Internal server error");

    Ok(())
}
