//! `[feed]` section: output location, published links, optional elements.

use crate::{
    config::ConfigDiagnostics,
    feed::{FeedFormat, FeedLinks},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Output directory, relative to the config file.
    pub output: PathBuf,

    /// Strip indentation from the written xml.
    pub minify: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,

    /// RSS `<ttl>` in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    /// WebSub hub URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hub: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,

    /// Feed logo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,

    /// Published URL per format. The URL path is also the output file path.
    pub links: FeedLinks,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            minify: false,
            generator: None,
            ttl: None,
            hub: None,
            docs: None,
            image: None,
            favicon: None,
            links: FeedLinks {
                rss2: "https://bd103.github.io/feed.xml".into(),
                atom: "https://bd103.github.io/atom.xml".into(),
            },
        }
    }
}

impl FeedConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (format, link) in self.links.iter() {
            let field = match format {
                FeedFormat::Rss2 => "feed.links.rss2",
                FeedFormat::Atom => "feed.links.atom",
            };
            if diag.check_url(field, link)
                && crate::config::util::extract_url_path(link).is_none_or(|p| p.is_empty())
            {
                diag.error_with_hint(
                    field,
                    "feed link has no file path",
                    format!("use format like https://example.com/{}", default_file(format)),
                );
            }
        }

        if self.links.rss2 == self.links.atom {
            diag.error("feed.links", "rss2 and atom must be published at different URLs");
        }

        for (field, value) in [
            ("feed.hub", &self.hub),
            ("feed.docs", &self.docs),
            ("feed.image", &self.image),
            ("feed.favicon", &self.favicon),
        ] {
            if let Some(url) = value {
                diag.check_url(field, url);
            }
        }

        if self.ttl == Some(0) {
            diag.error("feed.ttl", "must be greater than 0");
        }
    }
}

const fn default_file(format: FeedFormat) -> &'static str {
    match format {
        FeedFormat::Rss2 => "feed.xml",
        FeedFormat::Atom => "atom.xml",
    }
}
