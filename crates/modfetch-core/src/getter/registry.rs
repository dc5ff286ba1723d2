//! Scheme-to-backend registry.

use std::collections::HashMap;
use std::sync::Arc;

use super::{FileGetter, Getter, GitGetter, HgGetter, HttpGetter};

/// Mapping from scheme name to the backend that fetches it.
///
/// Built explicitly and handed to the orchestrator at construction time;
/// entries are only ever added before first use, so shared references can
/// read it concurrently without synchronization.
#[derive(Clone, Default)]
pub struct GetterRegistry {
    getters: HashMap<String, Arc<dyn Getter>>,
}

impl GetterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard backend set: `file`, `git`, `hg`, `http`, `https`.
    ///
    /// `http` and `https` share one instance; the protocol is carried in the
    /// address, not the handler identity.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        let http: Arc<dyn Getter> = Arc::new(HttpGetter);

        registry.register("file", Arc::new(FileGetter));
        registry.register("git", Arc::new(GitGetter));
        registry.register("hg", Arc::new(HgGetter));
        registry.register("http", Arc::clone(&http));
        registry.register("https", http);
        registry
    }

    /// Register a backend for a scheme, replacing any previous entry.
    pub fn register(&mut self, scheme: impl Into<String>, getter: Arc<dyn Getter>) {
        self.getters.insert(scheme.into(), getter);
    }

    /// Look up the backend for a scheme.
    pub fn get(&self, scheme: &str) -> Option<&Arc<dyn Getter>> {
        self.getters.get(scheme)
    }

    /// Registered scheme names, sorted.
    pub fn schemes(&self) -> Vec<&str> {
        let mut schemes: Vec<&str> = self.getters.keys().map(String::as_str).collect();
        schemes.sort_unstable();
        schemes
    }
}

impl std::fmt::Debug for GetterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetterRegistry")
            .field("schemes", &self.schemes())
            .finish()
    }
}
