//! Protocol backends for fetching module sources.
//!
//! Each backend implements [`Getter`] for one acquisition protocol. Backends
//! are stateless singletons; any per-fetch state lives in the destination
//! directory on disk. The set of known backends is held by a
//! [`GetterRegistry`] keyed by scheme name.

mod address;
mod file;
mod git;
mod hg;
mod http;
mod registry;

pub use address::Address;
pub use file::FileGetter;
pub use git::GitGetter;
pub use hg::HgGetter;
pub use http::HttpGetter;
pub use registry::GetterRegistry;

use std::path::Path;

/// Capability contract implemented by every protocol backend.
pub trait Getter: Send + Sync {
    /// Fetch or update the content at `address` into `dst`.
    ///
    /// The destination may already exist from a previous fetch; in that case
    /// the backend updates it in place. Fetching twice against the same
    /// address converges to the same end state as a single fresh fetch. A
    /// destination populated by an incompatible mechanism is an error, never
    /// silently overwritten.
    fn fetch(&self, dst: &Path, address: &Address) -> anyhow::Result<()>;
}

/// Check if a directory is empty.
pub(crate) fn is_empty_dir(path: &Path) -> anyhow::Result<bool> {
    use anyhow::Context;

    let mut entries = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read directory: {}", path.display()))?;
    Ok(entries.next().is_none())
}
