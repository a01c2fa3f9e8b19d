//! `[content]` section: where feed entries come from.

use crate::{
    config::ConfigDiagnostics,
    content::{ContentMetadata, ContentSource, FixedSource, PostDirSource},
    utils::date::DateTimeUtc,
};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of content index.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Entries listed under `[[content.entries]]`.
    #[default]
    Fixed,
    /// Markdown posts under `content.dir`.
    Posts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub source: SourceKind,

    /// Posts directory, relative to the config file.
    pub dir: PathBuf,

    /// Prefix of entry links: `{base_url}/{id}`.
    pub base_url: String,

    pub entries: Vec<ContentMetadata>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Fixed,
            dir: "content/blog".into(),
            base_url: "https://bd103.github.io/blog".into(),
            entries: vec![ContentMetadata {
                title: "Intercepting Allocations with the Global Allocator".into(),
                id: "2023-06-27-global-allocators".into(),
                date: DateTimeUtc::from_ymd(2023, 6, 27),
                link: None,
            }],
        }
    }
}

impl ContentConfig {
    /// Content source selected by `content.source`.
    pub fn content_source(&self) -> Box<dyn ContentSource> {
        match self.source {
            SourceKind::Fixed => Box::new(FixedSource::new(self.entries.clone())),
            SourceKind::Posts => Box::new(PostDirSource::new(self.dir.clone())),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        diag.check_url("content.base_url", &self.base_url);

        if self.source == SourceKind::Posts && !self.dir.is_dir() {
            diag.error_with_hint(
                "content.dir",
                format!("'{}' is not a directory", self.dir.display()),
                "create it or point content.dir at your posts",
            );
        }

        let mut seen = FxHashSet::default();
        for entry in &self.entries {
            if !seen.insert(entry.id.as_str()) {
                diag.error("content.entries", format!("duplicate id '{}'", entry.id));
            }
            if entry.title.trim().is_empty() {
                diag.error("content.entries", format!("'{}' has an empty title", entry.id));
            }
            if let Some(link) = &entry.link {
                diag.check_url("content.entries.link", link);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.content.source, SourceKind::Fixed);
        assert_eq!(config.content.base_url, "https://bd103.github.io/blog");
        assert_eq!(config.content.entries.len(), 1);
        assert_eq!(config.content.entries[0].id, "2023-06-27-global-allocators");
        assert_eq!(
            config.content.entries[0].date,
            DateTimeUtc::from_ymd(2023, 6, 27)
        );
    }

    #[test]
    fn test_entries_replace_default() {
        let config = test_parse_config(
            r#"
            [[content.entries]]
            title = "First"
            id = "2024-01-01-first"
            date = "2024-01-01"
            link = "https://elsewhere.dev/first"
        "#,
        );
        assert_eq!(config.content.entries.len(), 1);
        assert_eq!(config.content.entries[0].id, "2024-01-01-first");
        assert_eq!(
            config.content.entries[0].link.as_deref(),
            Some("https://elsewhere.dev/first")
        );
    }

    #[test]
    fn test_posts_source() {
        let config = test_parse_config("[content]\nsource = \"posts\"\ndir = \"posts\"");
        assert_eq!(config.content.source, SourceKind::Posts);
        assert_eq!(config.content.dir, PathBuf::from("posts"));
    }

    #[test]
    fn test_unquoted_entry_date() {
        let config = test_parse_config(
            "[[content.entries]]\ntitle = \"x\"\nid = \"x\"\ndate = 2023-06-27",
        );
        assert_eq!(
            config.content.entries[0].date,
            DateTimeUtc::from_ymd(2023, 6, 27)
        );
    }

    #[test]
    fn test_invalid_entry_date_rejected() {
        let result = crate::config::SiteConfig::from_str(
            "[[content.entries]]\ntitle = \"x\"\nid = \"x\"\ndate = \"2023-02-30\"",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_duplicates_and_missing_dir() {
        let config = test_parse_config(
            r#"
            [content]
            source = "posts"
            dir = "/definitely/not/here"

            [[content.entries]]
            title = "A"
            id = "same"
            date = "2024-01-01"

            [[content.entries]]
            title = " "
            id = "same"
            date = "2024-01-02"
        "#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.content.validate(&mut diag);

        let messages: Vec<_> = diag.errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(diag.errors()[0].field, "content.dir");
        assert!(messages.contains(&"duplicate id 'same'"));
        assert!(messages.contains(&"'same' has an empty title"));
    }
}
