//! The parsed fetch address handed to backends.

use url::Url;

/// A module address as a backend receives it: the base address text with
/// query attached, plus its URL form when the text parses as an absolute URL.
///
/// A scheme-less local path ("./modules/vpc", "/opt/modules") is a
/// well-formed address with no URL form; backends that need one fail with a
/// descriptive error instead.
#[derive(Debug, Clone)]
pub struct Address {
    base: String,
    url: Option<Url>,
}

impl Address {
    /// Parse an address from its base text.
    ///
    /// A text that is merely relative (no scheme) is accepted with no URL
    /// form; anything else that the URL grammar rejects is a parse error.
    pub fn parse(base: &str) -> Result<Self, url::ParseError> {
        match Url::parse(base) {
            Ok(url) => Ok(Self {
                base: base.to_string(),
                url: Some(url),
            }),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Self {
                base: base.to_string(),
                url: None,
            }),
            Err(cause) => Err(cause),
        }
    }

    /// The address text, query included.
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// URL form of the address, when it has one.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Scheme of the address, or the empty string for scheme-less paths.
    pub fn scheme(&self) -> &str {
        self.url.as_ref().map_or("", Url::scheme)
    }

    /// Split one query parameter off the address.
    ///
    /// Returns the address text with that parameter removed (and the `?`
    /// dropped entirely when nothing else remains) together with the
    /// parameter's value. Used by the VCS backends, which route a `ref`
    /// parameter to a checkout step rather than the remote.
    pub fn split_query_param(&self, key: &str) -> (String, Option<String>) {
        let Some((path, query)) = self.base.split_once('?') else {
            return (self.base.clone(), None);
        };

        let mut value = None;
        let mut kept = Vec::new();
        for pair in query.split('&') {
            match pair.split_once('=') {
                Some((k, v)) if k == key => value = Some(v.to_string()),
                _ if pair == key => value = Some(String::new()),
                _ => kept.push(pair),
            }
        }

        let stripped = if kept.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, kept.join("&"))
        };
        (stripped, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_has_url_form() {
        let address = Address::parse("https://example.com/repo.git?ref=v1").unwrap();
        assert_eq!(address.scheme(), "https");
        assert!(address.url().is_some());
    }

    #[test]
    fn bare_path_has_no_url_form() {
        let address = Address::parse("./modules/vpc").unwrap();
        assert_eq!(address.scheme(), "");
        assert!(address.url().is_none());
    }

    #[test]
    fn invalid_address_is_rejected() {
        assert!(Address::parse("https://example.com:99999999999/").is_err());
    }

    #[test]
    fn split_query_param_removes_only_the_named_key() {
        let address = Address::parse("https://example.com/repo.git?ref=v1&depth=1").unwrap();
        let (stripped, reference) = address.split_query_param("ref");

        assert_eq!(stripped, "https://example.com/repo.git?depth=1");
        assert_eq!(reference.as_deref(), Some("v1"));
    }

    #[test]
    fn split_query_param_drops_empty_query() {
        let address = Address::parse("https://example.com/repo.git?ref=v1").unwrap();
        let (stripped, reference) = address.split_query_param("ref");

        assert_eq!(stripped, "https://example.com/repo.git");
        assert_eq!(reference.as_deref(), Some("v1"));
    }

    #[test]
    fn split_query_param_without_query_is_identity() {
        let address = Address::parse("/opt/modules").unwrap();
        let (stripped, reference) = address.split_query_param("ref");

        assert_eq!(stripped, "/opt/modules");
        assert_eq!(reference, None);
    }
}
