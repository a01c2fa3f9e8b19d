//! Published-content index feeding the configurator.
//!
//! - **fixed**: entries listed in `feed.toml` (default: the one known post)
//! - **posts**: markdown files named `YYYY-MM-DD-slug.md` in a directory

mod fixed;
mod posts;

pub use fixed::FixedSource;
pub use posts::PostDirSource;

use crate::utils::date::{DateError, DateTimeUtc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Metadata of one published piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentMetadata {
    pub title: String,
    pub id: String,
    pub date: DateTimeUtc,
    /// Explicit URL; derived from the content base url when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Enumerates published content.
///
/// Every call returns a fresh, finite, ordered list, so sources can be
/// listed again on the next `feed:generate`.
pub trait ContentSource: Send + Sync {
    fn list_published(&self) -> Result<Vec<ContentMetadata>, ContentError>;
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid front matter in `{0}`")]
    FrontMatter(PathBuf, #[source] toml::de::Error),

    #[error("invalid date `{value}` in `{path}`")]
    InvalidDate {
        path: PathBuf,
        value: String,
        #[source]
        source: DateError,
    },

    #[error("no title in `{0}` (set `title` in front matter or add a `# heading`)")]
    MissingTitle(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_content_error_display() {
        let err = ContentError::Io(
            PathBuf::from("posts"),
            Error::new(ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("posts"));

        let err = ContentError::InvalidDate {
            path: PathBuf::from("a.md"),
            value: "2023-13-01".into(),
            source: DateError::Range {
                field: "month",
                value: 13,
            },
        };
        let display = err.to_string();
        assert!(display.contains("2023-13-01"));
        assert!(display.contains("a.md"));
    }

    #[test]
    fn test_metadata_from_toml() {
        let meta: ContentMetadata = toml::from_str(
            r#"
            title = "Post"
            id = "2023-06-27-post"
            date = "2023-06-27"
        "#,
        )
        .unwrap();
        assert_eq!(meta.date, DateTimeUtc::from_ymd(2023, 6, 27));
        assert_eq!(meta.link, None);
    }
}
