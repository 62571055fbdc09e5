//! Request and response types for forge release operations.

#[derive(Debug, Clone)]
/// Request to create a new release.
pub struct CreateReleaseRequest {
    /// Git tag for the release.
    pub tag: String,
    /// Display name for the release.
    pub name: String,
    /// Release notes body.
    pub notes: String,
}

#[derive(Debug, Clone)]
/// A release created on the forge.
pub struct Release {
    /// Forge-assigned release identifier.
    pub id: u64,
    /// Git tag the release was created with.
    pub tag: String,
}

#[derive(Debug, Clone)]
/// Request to upload a local file as an asset on an existing release.
pub struct UploadAssetRequest {
    /// Identifier of the release to attach the asset to.
    pub release_id: u64,
    /// Path to the local file to upload.
    pub asset_path: String,
    /// File name for the asset on the release.
    pub name: String,
    /// Display label for the asset on the release.
    pub label: String,
}

#[derive(Debug, Clone)]
/// An asset attached to a release.
pub struct Asset {
    /// Asset file name on the release.
    pub name: String,
    /// Download link for the uploaded asset.
    pub download_url: String,
}
