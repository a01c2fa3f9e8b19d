//! `init` command: write a starter feed.toml.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::fs;

/// Write the built-in defaults to `config.config_path`. Never overwrites.
pub fn new_config(config: &SiteConfig) -> Result<()> {
    let path = &config.config_path;
    if path.exists() {
        bail!(
            "{} already exists. Remove it manually or init in a different path.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, config.to_toml()?)
        .with_context(|| format!("failed to write {}", path.display()))?;

    log!("init"; "created {}", path.display());
    Ok(())
}
