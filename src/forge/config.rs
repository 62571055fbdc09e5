//! Configuration for forge platform connections.
use secrecy::SecretString;
use std::time::Duration;

/// Default forge host.
pub const DEFAULT_HOST: &str = "github.com";
/// Default per-request timeout in seconds for remote API calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Prefix for generated release notes.
pub const RELEASE_NOTES_PREFIX: &str = "Release for ";

/// Remote repository connection configuration for authenticating and
/// interacting with the forge platform.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote forge host (e.g., "github.com").
    pub host: String,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Full repository path.
    pub path: String,
    /// Access token for authentication.
    pub token: SecretString,
    /// Timeout applied to each request made by the underlying client.
    pub request_timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            scheme: "https".to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            path: "".to_string(),
            token: SecretString::from("".to_string()),
            request_timeout: Duration::from_secs(
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
        }
    }
}
