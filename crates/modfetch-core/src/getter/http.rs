//! HTTP/HTTPS backend.

use std::path::Path;

use anyhow::Context;
use url::Url;

use super::{Address, Getter};

/// Downloads a module over HTTP or HTTPS.
///
/// One instance serves both schemes; the protocol is carried in the address.
/// The response body lands in the destination directory under the last path
/// segment of the URL, so repeating the fetch rewrites the same file.
#[derive(Debug)]
pub struct HttpGetter;

impl HttpGetter {
    /// File name for the downloaded body, from the URL's last path segment.
    fn file_name(url: &Url) -> &str {
        url.path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty())
            .unwrap_or("index")
    }

    fn download(&self, url: &Url) -> anyhow::Result<Vec<u8>> {
        let response = reqwest::blocking::get(url.clone())
            .with_context(|| format!("Failed to download {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP {} from {}", response.status(), url);
        }

        let bytes = response
            .bytes()
            .with_context(|| format!("Failed to read response body from {}", url))?;
        Ok(bytes.to_vec())
    }
}

impl Getter for HttpGetter {
    fn fetch(&self, dst: &Path, address: &Address) -> anyhow::Result<()> {
        let url = address
            .url()
            .ok_or_else(|| anyhow::anyhow!("http getter requires a full URL, got '{}'", address.as_str()))?;

        std::fs::create_dir_all(dst)
            .with_context(|| format!("Failed to create directory: {}", dst.display()))?;

        tracing::debug!(url = %url, dst = %dst.display(), "downloading module");
        let body = self.download(url)?;

        let target = dst.join(Self::file_name(url));
        std::fs::write(&target, body)
            .with_context(|| format!("Failed to write {}", target.display()))
    }
}
