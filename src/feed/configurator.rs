//! Site feed configuration, run on `feed:generate`.

use super::{FeedBuilder, FeedError, FeedItem, FeedOptions};
use crate::{
    config::{SiteConfig, util::join_url},
    content::{ContentMetadata, ContentSource},
    debug,
    hooks::{FeedContext, FeedHook, HookError, HookEvent, HookRegistry},
};

/// Sets the feed options and appends one item per published entry.
pub struct FeedConfigurator {
    options: FeedOptions,
    base_url: String,
    source: Box<dyn ContentSource>,
}

impl FeedConfigurator {
    pub const NAME: &'static str = "feed-configurator";

    pub fn new(
        options: FeedOptions,
        base_url: impl Into<String>,
        source: Box<dyn ContentSource>,
    ) -> Self {
        Self {
            options,
            base_url: base_url.into(),
            source,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            feed_options(config),
            config.content.base_url.clone(),
            config.content.content_source(),
        )
    }

    /// Register for `feed:generate`. Consumes the configurator.
    pub fn register(self, registry: &mut HookRegistry) -> Result<(), HookError> {
        registry.register(HookEvent::FeedGenerate, Box::new(self))
    }

    /// Replace the builder's options, then append every published entry.
    ///
    /// Errors from the builder or the content source are returned as-is;
    /// the builder may then hold the new options and some of the items.
    pub fn configure(&self, feed: &mut dyn FeedBuilder) -> Result<(), FeedError> {
        feed.set_options(self.options.clone());

        let published = self.source.list_published()?;
        debug!("feed"; "{} published entries", published.len());

        for meta in published {
            feed.add_item(self.to_item(meta))?;
        }
        Ok(())
    }

    fn to_item(&self, meta: ContentMetadata) -> FeedItem {
        let link = meta
            .link
            .unwrap_or_else(|| join_url(&self.base_url, &meta.id));
        FeedItem {
            title: meta.title,
            id: meta.id,
            link,
            date: meta.date,
        }
    }
}

impl Default for FeedConfigurator {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

impl FeedHook for FeedConfigurator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(&self, ctx: &mut FeedContext<'_>) -> Result<(), FeedError> {
        self.configure(&mut *ctx.feed)
    }
}

fn feed_options(config: &SiteConfig) -> FeedOptions {
    let site = &config.site;
    let feed = &config.feed;

    FeedOptions {
        id: site.id.clone(),
        title: site.title.clone(),
        updated: site.updated,
        generator: feed.generator.clone(),
        language: site.language.clone(),
        ttl: feed.ttl,
        feed_links: feed.links.clone(),
        hub: feed.hub.clone(),
        docs: feed.docs.clone(),
        author: site.author.clone(),
        link: site.url.clone(),
        description: site.description.clone(),
        image: feed.image.clone(),
        favicon: feed.favicon.clone(),
        copyright: site.copyright.clone(),
    }
}
