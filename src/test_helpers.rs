//! Common test helper functions shared across test modules.
use secrecy::SecretString;
use std::time::Duration;

use crate::forge::config::RemoteConfig;

/// Creates a test RemoteConfig with sensible defaults.
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        host: "github.com".to_string(),
        scheme: "https".to_string(),
        owner: "acme".to_string(),
        repo: "widgets".to_string(),
        path: "acme/widgets".to_string(),
        token: SecretString::from("test-token".to_string()),
        request_timeout: Duration::from_secs(30),
    }
}
