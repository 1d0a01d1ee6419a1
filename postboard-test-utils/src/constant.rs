//! Fixed fixture values shared across tests.
//!
//! The IDs are valid 24 character hex identifiers so they pass the same validation as IDs
//! sent by real clients.

/// ID of the user authoring the mock messages
pub static TEST_AUTHOR_ID: &str = "602f41eb0937edf298486ac4";
/// ID of the message inserted by `with_mock_message`
pub static TEST_MESSAGE_ID_1: &str = "602f41f17f3cb147b7c5a39d";
/// Reserved for messages created during a test
pub static TEST_MESSAGE_ID_2: &str = "602f41f5ba4e8287fa25c919";

pub static TEST_USERNAME: &str = "usernametest";
pub static TEST_PASSWORD: &str = "passwordtest";

pub static TEST_TITLE_1: &str = "titletest1";
pub static TEST_BODY_1: &str = "bodytest1";
