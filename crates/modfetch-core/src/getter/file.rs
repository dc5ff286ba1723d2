//! Local filesystem backend.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::{Address, Getter};

/// Links a destination to a local source directory.
///
/// Accepts `file://` URLs and bare paths (`file::/opt/modules`,
/// `file::./modules/vpc`, `~/modules/vpc`). On Unix the destination
/// becomes a symlink to the source directory, so repeating the fetch
/// converges trivially: the old link is replaced with an identical one.
/// Elsewhere the source is mirrored with a filtered tree copy, rewritten
/// in place on a repeat fetch.
#[derive(Debug)]
pub struct FileGetter;

impl FileGetter {
    /// Resolve the address to a local filesystem path.
    fn source_path(&self, address: &Address) -> anyhow::Result<PathBuf> {
        if let Some(url) = address.url() {
            if url.scheme() != "file" {
                anyhow::bail!(
                    "file getter requires a local path or file URL, got '{}'",
                    address.as_str()
                );
            }
            return url
                .to_file_path()
                .map_err(|_| anyhow::anyhow!("invalid file URL: {}", address.as_str()));
        }

        // Bare path; drop any query text and expand a home-relative prefix.
        let raw = address.as_str();
        let path = raw.split_once('?').map_or(raw, |(p, _)| p);

        if let Some(rest) = path.strip_prefix("~/") {
            let home = dirs::home_dir().context("Could not determine home directory")?;
            return Ok(home.join(rest));
        }
        Ok(PathBuf::from(path))
    }
}

impl Getter for FileGetter {
    fn fetch(&self, dst: &Path, address: &Address) -> anyhow::Result<()> {
        let src = self.source_path(address)?;

        let metadata = std::fs::metadata(&src)
            .with_context(|| format!("source path does not exist: {}", src.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!("source path is not a directory: {}", src.display());
        }

        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        tracing::debug!(src = %src.display(), dst = %dst.display(), "linking local module");
        materialize(&src, dst)
    }
}

/// Make `dst` mirror the source directory via a symlink.
///
/// An existing link from a previous fetch is replaced; anything else at
/// the destination was not put there by this backend.
#[cfg(unix)]
fn materialize(src: &Path, dst: &Path) -> anyhow::Result<()> {
    match std::fs::symlink_metadata(dst) {
        Ok(existing) if existing.file_type().is_symlink() => {
            std::fs::remove_file(dst)
                .with_context(|| format!("Failed to remove previous link: {}", dst.display()))?;
        }
        Ok(_) => anyhow::bail!(
            "destination exists and is not a symlink: {}",
            dst.display()
        ),
        Err(_) => {}
    }

    std::os::unix::fs::symlink(src, dst)
        .with_context(|| format!("Failed to link {} to {}", dst.display(), src.display()))
}

/// Make `dst` mirror the source directory via a tree copy.
///
/// Creating symlinks needs elevated privileges on Windows, so the source
/// is copied instead. A previous copy at the destination is rewritten in
/// place; a destination that is not a directory was not put there by this
/// backend.
#[cfg(not(unix))]
fn materialize(src: &Path, dst: &Path) -> anyhow::Result<()> {
    match std::fs::symlink_metadata(dst) {
        Ok(existing) if existing.is_dir() => {}
        Ok(_) => anyhow::bail!(
            "destination exists and is not a directory: {}",
            dst.display()
        ),
        Err(_) => {}
    }

    copy_tree(src, dst)
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dst.display()))
}

/// Recursively copy a directory tree. Symlinks inside the source are
/// skipped; files are rewritten so repeated copies converge.
#[cfg(not(unix))]
fn copy_tree(src: &Path, dst: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dst)
        .with_context(|| format!("Failed to create directory: {}", dst.display()))?;

    for entry in std::fs::read_dir(src)
        .with_context(|| format!("Failed to read directory: {}", src.display()))?
    {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", src.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
        let target = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else if file_type.is_file() {
            std::fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to write {}", target.display()))?;
        }
    }
    Ok(())
}
