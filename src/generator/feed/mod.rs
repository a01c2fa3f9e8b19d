//! Feed serialization (RSS, Atom).
//!
//! Turns a populated `Feed` into documents:
//!
//! - **RSS 2.0**: published at `feed_links.rss2`
//! - **Atom 1.0**: published at `feed_links.atom`
//!
//! Each document is written under the output directory at the path of its
//! published URL.

pub mod atom;
pub mod rss;

use super::minify_xml;
use crate::{
    config::util::extract_url_path,
    feed::{Feed, FeedFormat},
    log,
};
use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Render one format.
pub fn render(feed: &Feed, format: FeedFormat) -> Result<String> {
    match format {
        FeedFormat::Rss2 => rss::to_rss_xml(feed),
        FeedFormat::Atom => atom::to_atom_xml(feed),
    }
}

/// Write every format under `output`, rendering them in parallel.
///
/// Returns the written paths, rss2 first.
pub fn write_feeds(feed: &Feed, output: &Path, minify: bool) -> Result<Vec<PathBuf>> {
    let (rss_result, atom_result) = rayon::join(
        || write_feed(feed, FeedFormat::Rss2, output, minify),
        || write_feed(feed, FeedFormat::Atom, output, minify),
    );

    Ok(vec![rss_result?, atom_result?])
}

fn write_feed(feed: &Feed, format: FeedFormat, output: &Path, minify: bool) -> Result<PathBuf> {
    let options = feed.require_options()?;
    let path = output_path(output, options.feed_links.get(format))?;
    let xml = render(feed, format)?;
    let xml = minify_xml(xml.as_bytes(), minify);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, &*xml).with_context(|| format!("failed to write {}", path.display()))?;

    let module = match format {
        FeedFormat::Rss2 => "rss",
        FeedFormat::Atom => "atom",
    };
    log!(module; "{}", path.strip_prefix(output).unwrap_or(&path).display());
    Ok(path)
}

/// `https://bd103.github.io/feed.xml` -> `<output>/feed.xml`
fn output_path(output: &Path, link: &str) -> Result<PathBuf> {
    extract_url_path(link)
        .filter(|path| !path.is_empty())
        .map(|path| output.join(path))
        .ok_or_else(|| anyhow!("feed link `{link}` has no file path"))
}
