//! `build` command: run `feed:generate` and write the documents.

use crate::{
    config::SiteConfig,
    debug,
    feed::{Feed, FeedConfigurator},
    generator::feed::write_feeds,
    hooks::{FeedContext, HookEvent, HookRegistry},
    log,
};
use anyhow::Result;

/// Register the configurator, fire `feed:generate` and return the feed.
///
/// The registry lives only for this call, so every generation starts from
/// a fresh feed and a fresh set of handlers.
pub fn generate_feed(config: &SiteConfig) -> Result<Feed> {
    let mut registry = HookRegistry::new();
    FeedConfigurator::from_config(config).register(&mut registry)?;

    let mut feed = Feed::new();
    let ran = registry.dispatch(HookEvent::FeedGenerate, &mut FeedContext::new(&mut feed))?;
    debug!(
        "build";
        "{} handler(s) ran on {}: {}",
        ran,
        HookEvent::FeedGenerate,
        registry.names(HookEvent::FeedGenerate).join(", ")
    );

    Ok(feed)
}

/// Generate the feed and write rss2 + atom under the output directory.
pub fn build_feeds(config: &SiteConfig) -> Result<()> {
    let feed = generate_feed(config)?;
    let written = write_feeds(&feed, &config.feed.output, config.feed.minify)?;

    log!(
        "build";
        "{} {} in {} files",
        feed.items().len(),
        if feed.items().len() == 1 { "entry" } else { "entries" },
        written.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_generate_default_feed() {
        let feed = generate_feed(&SiteConfig::default()).unwrap();
        assert_eq!(feed.options().unwrap().title, "BD103's Blog");
        assert_eq!(feed.items().len(), 1);
        assert_eq!(feed.items()[0].id, "2023-06-27-global-allocators");
    }

    #[test]
    fn test_generate_is_repeatable() {
        let config = SiteConfig::default();
        let first = generate_feed(&config).unwrap();
        let second = generate_feed(&config).unwrap();
        assert_eq!(first.options(), second.options());
        assert_eq!(first.items(), second.items());
    }

    #[test]
    fn test_build_from_posts_dir() {
        let tmp = TempDir::new().unwrap();
        let posts = tmp.path().join("content/blog");
        fs::create_dir_all(&posts).unwrap();
        fs::write(
            posts.join("2023-06-27-global-allocators.md"),
            "# Intercepting Allocations with the Global Allocator\n",
        )
        .unwrap();
        fs::write(posts.join("2023-09-01-next.md"), "# Next\n").unwrap();

        let mut config = SiteConfig::default();
        config.content.source = SourceKind::Posts;
        config.content.dir = posts;
        config.feed.output = tmp.path().join("public");

        build_feeds(&config).unwrap();

        let rss = fs::read_to_string(tmp.path().join("public/feed.xml")).unwrap();
        let channel = rss::Channel::read_from(rss.as_bytes()).unwrap();
        let ids: Vec<_> = channel
            .items()
            .iter()
            .map(|i| i.guid().unwrap().value())
            .collect();
        assert_eq!(ids, ["2023-09-01-next", "2023-06-27-global-allocators"]);
        assert_eq!(
            channel.items()[0].link(),
            Some("https://bd103.github.io/blog/2023-09-01-next")
        );
        assert!(tmp.path().join("public/atom.xml").exists());
    }

    #[test]
    fn test_build_fails_on_duplicate_entries() {
        let tmp = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        let entry = config.content.entries[0].clone();
        config.content.entries.push(entry);
        config.feed.output = tmp.path().to_path_buf();

        let err = build_feeds(&config).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate feed item id"));
        assert!(!tmp.path().join("feed.xml").exists());
    }
}
