//! Tests for HTTP controller endpoints.
//!
//! These tests drive the full router through an HTTP agent, then verify the database
//! state directly through the fixture helpers rather than trusting the API response.

mod message;

use postboard_test_utils::prelude::*;

use crate::util::TestContextExt;
