//! Release publication command implementation.
use log::*;

use crate::{
    cli,
    forge::{
        config::RELEASE_NOTES_PREFIX,
        github::Github,
        request::{CreateReleaseRequest, UploadAssetRequest},
        traits::Forge,
    },
    result::Result,
};

/// Execute publish command to create a release and attach the asset.
pub async fn execute(args: &cli::Args) -> Result<()> {
    let config = args.remote_config()?;
    let forge = Github::new(config).await?;

    publish(&forge, &args.version, &args.asset_path, &args.asset_name).await
}

/// Derive release notes for a version label.
fn release_notes(version: &str) -> String {
    format!("{RELEASE_NOTES_PREFIX}{version}")
}

/// Create a release tagged and named with the version label, then upload
/// the asset to it. The upload targets the release handle returned by
/// the creation call.
async fn publish(
    forge: &dyn Forge,
    version: &str,
    asset_path: &str,
    asset_name: &str,
) -> Result<()> {
    let config = forge.remote_config();

    info!("creating release {} for {}", version, config.path);

    let release = forge
        .create_release(CreateReleaseRequest {
            tag: version.to_string(),
            name: version.to_string(),
            notes: release_notes(version),
        })
        .await?;

    info!("created release: {}", release.tag);
    info!("uploading asset {} from {}", asset_name, asset_path);

    let asset = forge
        .upload_asset(UploadAssetRequest {
            release_id: release.id,
            asset_path: asset_path.to_string(),
            name: asset_name.to_string(),
            label: asset_name.to_string(),
        })
        .await?;

    info!("uploaded asset {}: {}", asset.name, asset.download_url);

    Ok(())
}
