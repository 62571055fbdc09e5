//! CLI argument parsing and remote forge configuration.
use clap::Parser;
use color_eyre::eyre::eyre;
use secrecy::SecretString;
use std::time::Duration;

use crate::{
    forge::config::{DEFAULT_HOST, DEFAULT_REQUEST_TIMEOUT_SECS, RemoteConfig},
    result::Result,
};

/// CLI arguments for publishing a release with an attached asset.
///
/// The five positional arguments are order-sensitive and mirror the
/// invocation surface of the tool: repository coordinate, access token,
/// version label, asset file path, asset display name.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct Args {
    /// Repository coordinate in owner/name form.
    pub repo: String,

    /// Access token authorizing release operations. Never logged.
    pub token: String,

    /// Version label used as both the git tag and the release name.
    pub version: String,

    /// Path to the local asset file to upload.
    pub asset_path: String,

    /// Display name for the uploaded asset.
    pub asset_name: String,

    #[arg(long, default_value = DEFAULT_HOST)]
    /// Forge host. Override for self-hosted or enterprise instances.
    pub host: String,

    #[arg(long, default_value = "https")]
    /// URL scheme for API requests (http or https).
    pub scheme: String,

    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    /// Per-request timeout in seconds for remote API calls.
    pub request_timeout: u64,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Configure remote repository connection from CLI arguments.
    pub fn remote_config(&self) -> Result<RemoteConfig> {
        let (owner, repo) = self
            .repo
            .split_once('/')
            .ok_or(eyre!("repo must be in owner/name form"))?;

        if owner.is_empty() || repo.is_empty() {
            return Err(eyre!("repo must be in owner/name form"));
        }

        if self.token.is_empty() {
            return Err(eyre!("must set an access token"));
        }

        validate_scheme(&self.scheme)?;

        Ok(RemoteConfig {
            host: self.host.clone(),
            scheme: self.scheme.clone(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            path: self.repo.clone(),
            token: SecretString::from(self.token.clone()),
            request_timeout: Duration::from_secs(self.request_timeout),
        })
    }
}

/// Validate API URL scheme is HTTP or HTTPS.
fn validate_scheme(scheme: &str) -> Result<()> {
    match scheme {
        "http" | "https" => Ok(()),
        _ => Err(eyre!(
            "only http and https schemes are supported for api requests"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: Vec<&str>) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    fn default_argv() -> Vec<&'static str> {
        vec![
            "relpub",
            "acme/widgets",
            "secret-token",
            "v1.2.3",
            "./build/widget.bin",
            "widget.bin",
        ]
    }

    #[test]
    fn parses_positional_args_in_order() {
        let args = parse(default_argv());

        assert_eq!(args.repo, "acme/widgets");
        assert_eq!(args.token, "secret-token");
        assert_eq!(args.version, "v1.2.3");
        assert_eq!(args.asset_path, "./build/widget.bin");
        assert_eq!(args.asset_name, "widget.bin");
        assert!(!args.debug);
    }

    #[test]
    fn fails_parsing_when_args_are_missing() {
        let result = Args::try_parse_from(vec![
            "relpub",
            "acme/widgets",
            "secret-token",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn remote_config_splits_repo_coordinate() {
        let args = parse(default_argv());
        let config = args.remote_config().unwrap();

        assert_eq!(config.owner, "acme");
        assert_eq!(config.repo, "widgets");
        assert_eq!(config.path, "acme/widgets");
        assert_eq!(config.host, "github.com");
        assert_eq!(config.scheme, "https");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn remote_config_rejects_malformed_coordinate() {
        let mut argv = default_argv();
        argv[1] = "widgets";
        let args = parse(argv.clone());
        assert!(args.remote_config().is_err());

        argv[1] = "/widgets";
        let args = parse(argv);
        assert!(args.remote_config().is_err());
    }

    #[test]
    fn remote_config_rejects_unsupported_scheme() {
        let mut argv = default_argv();
        argv.extend(["--scheme", "ssh"]);
        let args = parse(argv);
        assert!(args.remote_config().is_err());
    }

    #[test]
    fn remote_config_accepts_custom_host() {
        let mut argv = default_argv();
        argv.extend(["--host", "github.example.com"]);
        let args = parse(argv);
        let config = args.remote_config().unwrap();
        assert_eq!(config.host, "github.example.com");
    }
}
