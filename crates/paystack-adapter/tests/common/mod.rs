/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for paystack-adapter tests

use paystack_adapter::{ClientConfig, PaystackClient};
use wiremock::MockServer;

pub const TEST_SECRET_KEY: &str = "sk_test_0123456789abcdef";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> PaystackClient {
    PaystackClient::with_config_and_base_url(TEST_SECRET_KEY, ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Expected Authorization header value
pub fn bearer() -> String {
    format!("Bearer {TEST_SECRET_KEY}")
}
