//! Module acquisition orchestration.
//!
//! Ties the locator grammar, the backend registry, and the backends
//! together: parse the source, resolve the scheme, dispatch the fetch, and
//! wrap failures with enough context to diagnose them in one pass.

use std::path::Path;

use crate::error::GetError;
use crate::getter::{Address, GetterRegistry};
use crate::source::Locator;

/// Resolves module source strings and drives the matching backend.
#[derive(Debug)]
pub struct ModuleFetcher {
    registry: GetterRegistry,
}

impl ModuleFetcher {
    /// Create a fetcher over an explicitly constructed registry.
    pub fn new(registry: GetterRegistry) -> Self {
        Self { registry }
    }

    /// Create a fetcher over the standard backend set.
    pub fn standard() -> Self {
        Self::new(GetterRegistry::standard())
    }

    /// The registry this fetcher dispatches against.
    pub fn registry(&self) -> &GetterRegistry {
        &self.registry
    }

    /// Download the module at `src` into the directory `dst`.
    ///
    /// `src` may use force syntax, carry a sub-path, and carry query
    /// parameters; `dst` is always a plain directory path. A destination
    /// already populated by an earlier fetch of the same source is updated
    /// in place by the backend, never deleted and re-created wholesale.
    /// The sub-path, if any, stays on the [`Locator`] for the caller to
    /// apply to the fetched tree.
    pub fn get(&self, dst: &Path, src: &str) -> Result<(), GetError> {
        let locator = Locator::parse(src);

        let address =
            Address::parse(locator.base()).map_err(|cause| GetError::MalformedSource {
                source_str: src.to_string(),
                cause,
            })?;

        // Force syntax wins over the address's own scheme. A scheme-less
        // bare path resolves to the empty scheme, which no registry maps.
        let scheme = locator.forced_scheme().unwrap_or_else(|| address.scheme());

        let getter = self
            .registry
            .get(scheme)
            .ok_or_else(|| GetError::UnsupportedScheme {
                scheme: scheme.to_string(),
            })?;

        tracing::debug!(
            scheme,
            source = src,
            dst = %dst.display(),
            "dispatching module fetch"
        );

        getter.fetch(dst, &address).map_err(|cause| GetError::Download {
            source_str: src.to_string(),
            cause,
        })
    }
}

/// Download the module at `src` into `dst` using the standard backend set.
///
/// Convenience wrapper over [`ModuleFetcher::standard`].
pub fn get(dst: &Path, src: &str) -> Result<(), GetError> {
    ModuleFetcher::standard().get(dst, src)
}
