//! Traits related to remote git forges.
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    forge::{
        config::RemoteConfig,
        request::{Asset, CreateReleaseRequest, Release, UploadAssetRequest},
    },
    result::Result,
};

/// Remote release operations exposed by a forge platform.
///
/// Implementations authenticate and resolve the target repository at
/// construction time, so every method here operates against a known-good
/// repository handle.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge {
    /// Connection configuration for this forge.
    fn remote_config(&self) -> RemoteConfig;

    /// Create a new release for a tag.
    async fn create_release(
        &self,
        req: CreateReleaseRequest,
    ) -> Result<Release>;

    /// Upload a local file as an asset on a release.
    async fn upload_asset(&self, req: UploadAssetRequest) -> Result<Asset>;
}
