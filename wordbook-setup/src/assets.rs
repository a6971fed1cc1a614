use std::path::{Component, Path, PathBuf};

use anyhow::{Context, bail};
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;
use walkdir::WalkDir;

pub const DEFAULT_PREFIX: &str = "word-images/";

/// Every regular file below `root`, in a stable order.
pub fn collect_asset_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("asset directory `{}` does not exist", root.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk `{}`", root.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Key of `file` in the bucket: `prefix` followed by its path relative to
/// `root`, always with `/` separators.
pub fn object_key(root: &Path, file: &Path, prefix: &str) -> anyhow::Result<String> {
    let relative = file
        .strip_prefix(root)
        .with_context(|| format!("`{}` is not inside `{}`", file.display(), root.display()))?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        bail!("`{}` has no file name below `{}`", file.display(), root.display());
    }
    Ok(format!("{prefix}{}", parts.join("/")))
}

pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Uploads the tree under `root`, stopping at the first failure.
pub async fn upload_assets(
    client: &Client,
    bucket: &str,
    root: &Path,
    prefix: &str,
) -> anyhow::Result<usize> {
    let files = collect_asset_files(root)?;
    for file in &files {
        let key = object_key(root, file, prefix)?;
        let body = ByteStream::from_path(file)
            .await
            .with_context(|| format!("failed to open `{}`", file.display()))?;
        client
            .put_object()
            .bucket(bucket)
            .key(&key)
            .content_type(content_type_for(file))
            .body(body)
            .send()
            .await
            .with_context(|| format!("failed to upload `{}`", file.display()))?;
        info!("Successfully uploaded {} to s3://{bucket}/{key}", file.display());
    }
    Ok(files.len())
}
