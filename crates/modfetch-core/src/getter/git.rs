//! Git backend.

use std::path::Path;
use std::process::Command;

use anyhow::Context;

use super::{Address, Getter, is_empty_dir};
use crate::exec;

/// Fetches modules by driving the git command-line client.
///
/// A missing destination is cloned; a destination holding a `.git` directory
/// is updated in place. A `ref` query parameter names a branch, tag or
/// commit to check out after the clone or update; it is stripped from the
/// address before it reaches the remote.
#[derive(Debug)]
pub struct GitGetter;

impl GitGetter {
    fn clone(&self, dst: &Path, remote: &str) -> anyhow::Result<()> {
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let dst = dst
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid destination path"))?;
        exec::run(Command::new("git").args(["clone", remote, dst]))?;
        Ok(())
    }

    fn update(&self, dst: &Path, reference: Option<&str>) -> anyhow::Result<()> {
        // With a pinned ref the checkout below moves HEAD; a plain pull
        // would fail on the detached head, so only fetch.
        let args: &[&str] = match reference {
            Some(_) => &["fetch", "origin"],
            None => &["pull", "--ff-only"],
        };
        exec::run(Command::new("git").args(args).current_dir(dst))?;
        Ok(())
    }

    fn checkout(&self, dst: &Path, reference: &str) -> anyhow::Result<()> {
        exec::run(Command::new("git").args(["checkout", reference]).current_dir(dst))?;
        Ok(())
    }
}

impl Getter for GitGetter {
    fn fetch(&self, dst: &Path, address: &Address) -> anyhow::Result<()> {
        let (remote, reference) = address.split_query_param("ref");

        if dst.join(".git").exists() {
            tracing::debug!(dst = %dst.display(), "updating existing git checkout");
            self.update(dst, reference.as_deref())?;
        } else if dst.exists() && !is_empty_dir(dst)? {
            anyhow::bail!(
                "destination {} exists but is not a git repository",
                dst.display()
            );
        } else {
            tracing::debug!(remote = %remote, dst = %dst.display(), "cloning git repository");
            self.clone(dst, &remote)?;
        }

        if let Some(reference) = &reference {
            self.checkout(dst, reference)?;
        }
        Ok(())
    }
}
