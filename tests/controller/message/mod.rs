//! Tests for message controller endpoints.
//!
//! Every scenario starts from its own database seeded with the test author and one message
//! ([`TEST_MESSAGE_ID_1`], `titletest1`, `bodytest1`).

mod create;
mod delete;
mod get;
mod list;

use axum::http::StatusCode;
use serde_json::{json, Value};

use super::*;

/// Seed the standard author & message into a fresh database
async fn seeded() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_message_tables()
        .with_mock_user()
        .with_mock_message()
        .build()
        .await
}

/// Tests that explicit teardown empties the store after a scenario mutated it.
///
/// Expected: 200 OK with an empty `messages` list after teardown
#[tokio::test]
async fn teardown_removes_messages_created_over_http() -> Result<(), TestError> {
    let mut test = seeded().await?;
    let agent = test.agent();

    agent
        .post("/messages")
        .json(&json!({
            "title": "titletest2",
            "body": "bodytest2",
            "author": TEST_AUTHOR_ID,
        }))
        .await
        .assert_status_ok();

    test.teardown().await?;

    let resp = agent.get("/messages").await;
    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["messages"].as_array().map(Vec::len), Some(0));
    assert!(test.user().get(TEST_AUTHOR_ID).await?.is_none());

    Ok(())
}
