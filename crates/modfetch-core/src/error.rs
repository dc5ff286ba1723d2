//! Error types for module acquisition.

use thiserror::Error;

/// Failure modes of [`crate::fetch::ModuleFetcher::get`].
///
/// Callers can match on the variant to distinguish an unparseable source
/// from a well-formed one with no registered backend, while the Display
/// form still renders a complete diagnostic naming the original source.
#[derive(Debug, Error)]
pub enum GetError {
    /// The source string, after force-stripping, does not parse as an address.
    #[error("invalid module source '{source_str}': {cause}")]
    MalformedSource {
        /// Original source string as given by the caller
        source_str: String,
        #[source]
        cause: url::ParseError,
    },

    /// The resolved scheme (forced or inferred) has no registered backend.
    #[error("module download not supported for scheme '{scheme}'")]
    UnsupportedScheme {
        /// The offending scheme; empty for scheme-less sources
        scheme: String,
    },

    /// The backend accepted the address but failed to fetch it.
    #[error("error downloading module '{source_str}': {cause:#}")]
    Download {
        /// Original source string as given by the caller
        source_str: String,
        /// Underlying backend failure, downcastable to its concrete type
        cause: anyhow::Error,
    },
}

impl GetError {
    /// The underlying backend error, if this is a download failure.
    pub fn download_cause(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Download { cause, .. } => Some(cause),
            _ => None,
        }
    }
}
