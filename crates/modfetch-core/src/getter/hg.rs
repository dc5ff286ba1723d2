//! Mercurial backend.

use std::path::Path;
use std::process::Command;

use anyhow::Context;

use super::{Address, Getter, is_empty_dir};
use crate::exec;

/// Fetches modules by driving the hg command-line client.
///
/// A missing destination gets `hg clone -U`; a destination holding a `.hg`
/// directory gets `hg pull`. Either way the working directory is then
/// brought to the `ref` query parameter when one is given, or to the
/// repository default otherwise.
#[derive(Debug)]
pub struct HgGetter;

impl HgGetter {
    fn clone(&self, dst: &Path, remote: &str) -> anyhow::Result<()> {
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let dst = dst
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid destination path"))?;
        exec::run(Command::new("hg").args(["clone", "-U", remote, dst]))?;
        Ok(())
    }

    fn pull(&self, dst: &Path) -> anyhow::Result<()> {
        exec::run(Command::new("hg").arg("pull").current_dir(dst))?;
        Ok(())
    }

    fn update(&self, dst: &Path, reference: Option<&str>) -> anyhow::Result<()> {
        let mut cmd = Command::new("hg");
        cmd.arg("update").current_dir(dst);
        if let Some(reference) = reference {
            cmd.arg(reference);
        }
        exec::run(&mut cmd)?;
        Ok(())
    }
}

impl Getter for HgGetter {
    fn fetch(&self, dst: &Path, address: &Address) -> anyhow::Result<()> {
        let (remote, reference) = address.split_query_param("ref");

        if dst.join(".hg").exists() {
            tracing::debug!(dst = %dst.display(), "pulling into existing hg checkout");
            self.pull(dst)?;
        } else if dst.exists() && !is_empty_dir(dst)? {
            anyhow::bail!(
                "destination {} exists but is not a mercurial repository",
                dst.display()
            );
        } else {
            tracing::debug!(remote = %remote, dst = %dst.display(), "cloning hg repository");
            self.clone(dst, &remote)?;
        }

        self.update(dst, reference.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn populated_non_hg_destination_is_rejected() {
        let tmp = TempDir::new().expect("tempdir should succeed");
        let dst = tmp.path().join("module");
        std::fs::create_dir_all(&dst).expect("create_dir_all should succeed");
        std::fs::write(dst.join("stray.txt"), "not a checkout").expect("write should succeed");

        let address = Address::parse("https://example.com/repo").unwrap();
        let err = HgGetter.fetch(&dst, &address).expect_err("fetch should fail");

        assert!(err.to_string().contains("not a mercurial repository"));
        assert!(dst.join("stray.txt").exists(), "must not touch the destination");
    }
}
