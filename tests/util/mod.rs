//! Test utilities for running the application router against a test database

use axum_test::TestServer;
use postboard::server::{model::app::AppState, router};
use postboard_test_utils::TestContext;

/// Extension trait for TestContext to build the application on top of its database
pub trait TestContextExt {
    fn app_state(&self) -> AppState;

    /// HTTP agent bound to the full application router, sharing this context's database
    fn agent(&self) -> TestServer;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn agent(&self) -> TestServer {
        let app = router::routes().with_state(self.app_state());

        TestServer::new(app).expect("Failed to start test agent")
    }
}
