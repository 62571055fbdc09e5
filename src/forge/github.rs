//! Implements the Forge trait for GitHub
use async_trait::async_trait;
use bytes::Bytes;
use color_eyre::eyre::{WrapErr, eyre};
use log::*;
use octocrab::Octocrab;
use reqwest::StatusCode;

use crate::{
    forge::{
        config::RemoteConfig,
        request::{Asset, CreateReleaseRequest, Release, UploadAssetRequest},
        traits::Forge,
    },
    result::Result,
};

/// GitHub forge implementation using Octocrab for release creation and
/// asset uploads.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and
    /// API base URL configuration, then resolve the target repository.
    pub async fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = api_base_uri(&config.scheme, &config.host);
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri)?
            .set_connect_timeout(Some(config.request_timeout))
            .set_read_timeout(Some(config.request_timeout));
        let instance = builder.build()?;

        let result = instance.repos(&config.owner, &config.repo).get().await;

        let repo = match result {
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                Err(eyre!("repository not found: {}", config.path))
            }
            Err(err) => Err(eyre!(
                "failed to resolve repository {}: {err}",
                config.path
            )),
            Ok(repo) => Ok(repo),
        }?;

        info!(
            "resolved repository: {}",
            repo.full_name.unwrap_or(config.path.clone())
        );

        Ok(Self { config, instance })
    }
}

/// API base URL for a GitHub host (e.g. <https://api.github.com>).
fn api_base_uri(scheme: &str, host: &str) -> String {
    format!("{scheme}://api.{host}")
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<Release> {
        let release = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .create(&req.tag)
            .name(&req.name)
            .body(&req.notes)
            .draft(false)
            .prerelease(false)
            .send()
            .await
            .wrap_err(format!("failed to create release: {}", req.tag))?;

        Ok(Release {
            id: release.id.0,
            tag: release.tag_name,
        })
    }

    async fn upload_asset(&self, req: UploadAssetRequest) -> Result<Asset> {
        let data = tokio::fs::read(&req.asset_path).await.wrap_err(format!(
            "failed to read asset file: {}",
            req.asset_path
        ))?;

        let asset = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .upload_asset(req.release_id, &req.name, Bytes::from(data))
            .label(&req.label)
            .send()
            .await
            .wrap_err(format!("failed to upload asset: {}", req.name))?;

        Ok(Asset {
            name: asset.name,
            download_url: asset.browser_download_url.to_string(),
        })
    }
}
