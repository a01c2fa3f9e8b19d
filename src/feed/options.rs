//! Feed-wide metadata.

use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output format a feed document is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 (`feed.xml`).
    Rss2,
    /// Atom 1.0 (`atom.xml`).
    Atom,
}

impl FeedFormat {
    pub const ALL: [Self; 2] = [Self::Rss2, Self::Atom];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rss2 => "rss2",
            Self::Atom => "atom",
        }
    }

    /// MIME type used for `rel="self"` links.
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Rss2 => "application/rss+xml",
            Self::Atom => "application/atom+xml",
        }
    }
}

impl fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Published URL of every output format.
///
/// Both formats are always present; a feed is never published in only one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedLinks {
    pub rss2: String,
    pub atom: String,
}

impl FeedLinks {
    pub fn get(&self, format: FeedFormat) -> &str {
        match format {
            FeedFormat::Rss2 => &self.rss2,
            FeedFormat::Atom => &self.atom,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeedFormat, &str)> {
        FeedFormat::ALL.into_iter().map(|format| (format, self.get(format)))
    }
}

/// Feed author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Metadata describing the feed as a whole.
///
/// Every `Option` field is left out of the rendered documents when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedOptions {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTimeUtc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    pub feed_links: FeedLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    pub author: Author,
    pub link: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub copyright: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> FeedLinks {
        FeedLinks {
            rss2: "https://example.com/feed.xml".into(),
            atom: "https://example.com/atom.xml".into(),
        }
    }

    #[test]
    fn test_feed_links_iter_covers_both_formats() {
        let links = links();
        let all: Vec<_> = links.iter().collect();
        assert_eq!(
            all,
            vec![
                (FeedFormat::Rss2, "https://example.com/feed.xml"),
                (FeedFormat::Atom, "https://example.com/atom.xml"),
            ]
        );
    }

    #[test]
    fn test_feed_format_names() {
        assert_eq!(FeedFormat::Rss2.to_string(), "rss2");
        assert_eq!(FeedFormat::Atom.as_str(), "atom");
        assert_eq!(FeedFormat::Atom.mime_type(), "application/atom+xml");
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let options = FeedOptions {
            id: "https://example.com".into(),
            title: "Blog".into(),
            updated: None,
            generator: None,
            language: "en".into(),
            ttl: None,
            feed_links: links(),
            hub: None,
            docs: None,
            author: Author {
                name: "Me".into(),
                link: "https://example.com".into(),
                email: None,
            },
            link: "https://example.com".into(),
            description: "desc".into(),
            image: None,
            favicon: None,
            copyright: "2023 Me".into(),
        };

        let json = serde_json::to_value(&options).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            [
                "id",
                "title",
                "language",
                "feedLinks",
                "author",
                "link",
                "description",
                "copyright"
            ]
        );
        assert!(json["author"].get("email").is_none());
    }
}
