//! Shared harness for console client integration tests.
//!
//! Every test runs the real client against a scripted [`MockServer`]
//! standing in for the iSmartPay admin REST service.

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;
use url::Url;
use wiremock::MockServer;

use ismartpay_client::{ConsoleClient, ConsoleConfig};

/// A mock service plus a client pointed at it.
pub struct TestConsole {
    pub server: MockServer,
    pub client: ConsoleClient,
}

/// Start a mock service and build an unauthenticated client against it.
///
/// # Panics
///
/// Panics if the mock server or client cannot be constructed.
pub async fn console() -> TestConsole {
    let server = MockServer::start().await;
    let api_url = Url::parse(&server.uri()).expect("mock server uri");
    let client = ConsoleClient::new(&ConsoleConfig::new(api_url)).expect("build client");
    TestConsole { server, client }
}

/// Start a mock service and build a client with a session token already
/// installed, skipping the login round-trip.
pub async fn authenticated_console() -> TestConsole {
    let tc = console().await;
    tc.client.session().begin(SecretString::from("test-token"));
    tc
}
