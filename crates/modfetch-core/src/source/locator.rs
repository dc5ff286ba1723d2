//! Locator grammar parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The parsed, structured form of a raw module source string.
///
/// Parsing is pure string processing with no I/O and no validation of the
/// base address; address validation happens when a backend is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    /// Explicit backend override from `scheme::` force syntax
    pub forced_scheme: Option<String>,
    /// Base address with any relocated query parameters reattached
    pub base: String,
    /// Path inside the fetched artifact treated as the effective root
    pub subdir: Option<String>,
    /// Query portion of the base address, without the leading `?`
    pub query: Option<String>,
}

impl Locator {
    /// Parse a raw source string into its locator form.
    ///
    /// The forced-scheme marker is recognized only once, at the start of the
    /// string. The sub-path delimiter is the first `//` found after any
    /// `://`, so a URL's own scheme separator is never mistaken for it.
    /// Query text found on the sub-path is moved onto the base address.
    pub fn parse(src: &str) -> Self {
        let (forced, rest) = split_forced(src);
        let (base, subdir) = split_subdir(rest);

        let mut base = base.to_string();
        let mut subdir = subdir.map(str::to_string);

        // Query parameters travel with the fetch address, not the sub-path.
        if let Some(sub) = subdir.as_mut()
            && let Some(idx) = sub.find('?')
        {
            base.push_str(&sub[idx..]);
            sub.truncate(idx);
        }
        let subdir = subdir.filter(|s| !s.is_empty());

        let query = base.split_once('?').map(|(_, q)| q.to_string());

        Self {
            forced_scheme: forced.map(str::to_string),
            base,
            subdir,
            query,
        }
    }

    /// Base address (query included), with force syntax and sub-path removed.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The forced scheme, if the source used `scheme::` syntax.
    pub fn forced_scheme(&self) -> Option<&str> {
        self.forced_scheme.as_deref()
    }

    /// Sub-path inside the fetched artifact, if one was given.
    pub fn subdir(&self) -> Option<&str> {
        self.subdir.as_deref()
    }
}

impl fmt::Display for Locator {
    /// Renders the locator back to source syntax. Query parameters appear on
    /// the base address, which is where the grammar routes them anyway, so
    /// the rendered form is addressing-equivalent to the original input.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.forced_scheme {
            write!(f, "{}::", scheme)?;
        }
        write!(f, "{}", self.base)?;
        if let Some(subdir) = &self.subdir {
            write!(f, "//{}", subdir)?;
        }
        Ok(())
    }
}

/// Split a leading `scheme::` force marker off a source string.
///
/// The marker is a non-empty run of ASCII letters followed by `::` and a
/// non-empty remainder. Only the first marker is recognized; the remainder
/// is not re-scanned.
pub(crate) fn split_forced(src: &str) -> (Option<&str>, &str) {
    if let Some((head, rest)) = src.split_once("::")
        && !head.is_empty()
        && !rest.is_empty()
        && head.chars().all(|c| c.is_ascii_alphabetic())
    {
        return (Some(head), rest);
    }
    (None, src)
}

/// Split a source string into base address and sub-path.
///
/// The search for the `//` delimiter starts just past any `://`, so the
/// double slash of a URL scheme never counts as a sub-path marker.
pub(crate) fn split_subdir(src: &str) -> (&str, Option<&str>) {
    let offset = src.find("://").map_or(0, |idx| idx + 3);

    match src[offset..].find("//") {
        None => (src, None),
        Some(idx) => {
            let idx = offset + idx;
            (&src[..idx], Some(&src[idx + 2..]))
        }
    }
}
