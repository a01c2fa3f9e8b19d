//! Configuration management for `feed.toml`.
//!
//! # Sections
//!
//! | Section           | Purpose                                          |
//! |-------------------|--------------------------------------------------|
//! | `[site]`          | Feed identity (id, title, url, language, author) |
//! | `[feed]`          | Output dir, published links, optional elements   |
//! | `[content]`       | Where entries come from (fixed list or posts)    |
//!
//! Every field has a default, so a missing `feed.toml` yields BD103's feed.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "BD103's Blog"
//! copyright = "2023 BD103"
//!
//! [feed.links]
//! rss2 = "https://bd103.github.io/feed.xml"
//! atom = "https://bd103.github.io/atom.xml"
//!
//! [content]
//! source = "posts"
//! dir = "content/blog"
//! ```

mod error;
pub mod section;
pub mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use section::{ContentConfig, FeedConfig, SiteInfoConfig, SourceKind};

use crate::{
    cli::{BuildArgs, Cli, Commands, QueryArgs},
    log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing feed.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteInfoConfig,

    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file; falls back to the
    /// built-in defaults when there is none. `init` never reads a file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (mut config, config_path) = match &cli.command {
            Commands::Init { name } => {
                let dir = name.as_ref().map_or_else(|| cwd.clone(), |n| cwd.join(n));
                (Self::default(), dir.join(&cli.config))
            }
            _ => match find_config_file(&cli.config) {
                Some(path) => (Self::from_path(&path)?, path),
                None => {
                    log!("hint"; "no {} found, using built-in defaults", cli.config.display());
                    (Self::default(), cwd.join(&cli.config))
                }
            },
        };

        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(cwd);
        config.config_path = config_path;
        config.apply_command_options(&cli.command);
        config.normalize_paths();

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {} are ignored: {}", path.display(), ignored.join(", "));
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Render as TOML for `init`.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Validate every section, collecting all problems.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.feed.validate(&mut diag);
        self.content.validate(&mut diag);
        diag.into_result()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_command_options(&mut self, command: &Commands) {
        match command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Query { args } => self.apply_query_args(args),
            Commands::Init { .. } => {}
        }
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.feed.output, args.output.as_ref());
        Self::update_option(&mut self.feed.minify, args.minify.as_ref());
        self.apply_content_dir(args.content.as_ref());
    }

    fn apply_query_args(&mut self, args: &QueryArgs) {
        crate::logger::set_verbose(args.verbose);
        self.apply_content_dir(args.content.as_ref());
    }

    /// `--content DIR` switches to the posts source.
    fn apply_content_dir(&mut self, dir: Option<&PathBuf>) {
        if let Some(dir) = dir {
            self.content.source = SourceKind::Posts;
            self.content.dir = dir.clone();
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve relative paths against the root.
    fn normalize_paths(&mut self) {
        self.feed.output = self.root_join(&self.feed.output);
        self.content.dir = self.root_join(&self.content.dir);
    }
}

/// Parse a config string for section tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    SiteConfig::from_str(content).expect("test config should parse")
}
