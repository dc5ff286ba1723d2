//! Modfetch Core Library
//!
//! Resolves user-supplied module source strings and acquires their content
//! into local destination directories through pluggable protocol backends.

pub mod error;
pub mod exec;
pub mod fetch;
pub mod getter;
pub mod source;

pub use error::GetError;
pub use fetch::{ModuleFetcher, get};

/// Re-exports of commonly used types
pub mod prelude {
    // Orchestration
    pub use crate::error::GetError;
    pub use crate::fetch::{ModuleFetcher, get};

    // Source parsing
    pub use crate::source::Locator;

    // Backends
    pub use crate::getter::{
        Address, FileGetter, Getter, GetterRegistry, GitGetter, HgGetter, HttpGetter,
    };

    // External tools
    pub use crate::exec::ToolError;
}
