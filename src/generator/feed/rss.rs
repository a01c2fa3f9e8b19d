//! RSS 2.0 feed rendering.

use crate::{
    feed::{Author, Feed, FeedItem},
    utils::date::DateTimeUtc,
};
use anyhow::{Result, anyhow};
use rss::{ChannelBuilder, GuidBuilder, ImageBuilder, ItemBuilder, validation::Validate};

/// Render the feed as a validated RSS 2.0 document.
pub fn to_rss_xml(feed: &Feed) -> Result<String> {
    let options = feed.require_options()?;
    let items: Vec<_> = feed.items().iter().map(to_rss_item).collect();

    let image = options.image.as_ref().map(|url| {
        ImageBuilder::default()
            .url(url.clone())
            .title(options.title.clone())
            .link(options.link.clone())
            .build()
    });

    let channel = ChannelBuilder::default()
        .title(&options.title)
        .link(&options.link)
        .description(&options.description)
        .language(options.language.clone())
        .copyright(non_empty(&options.copyright))
        .managing_editor(rss_author(&options.author))
        .generator(options.generator.clone())
        .ttl(options.ttl.map(|ttl| ttl.to_string()))
        .docs(options.docs.clone())
        .image(image)
        .last_build_date(options.updated.map(DateTimeUtc::to_rfc2822))
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn to_rss_item(item: &FeedItem) -> rss::Item {
    ItemBuilder::default()
        .title(item.title.clone())
        .link(item.link.clone())
        .guid(
            GuidBuilder::default()
                .permalink(false)
                .value(item.id.clone())
                .build(),
        )
        .pub_date(item.date.to_rfc2822())
        .build()
}

/// RSS wants "email (Name)"; without an email there is nothing valid to emit.
fn rss_author(author: &Author) -> Option<String> {
    author
        .email
        .as_ref()
        .map(|email| format!("{} ({})", email, author.name))
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedBuilder, FeedConfigurator};

    fn default_feed() -> Feed {
        let mut feed = Feed::new();
        FeedConfigurator::default().configure(&mut feed).unwrap();
        feed
    }

    #[test]
    fn test_default_channel() {
        let xml = to_rss_xml(&default_feed()).unwrap();
        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();

        assert_eq!(channel.title(), "BD103's Blog");
        assert_eq!(channel.link(), "https://bd103.github.io");
        assert_eq!(
            channel.description(),
            "BD103's technical blog about programming!"
        );
        assert_eq!(channel.language(), Some("en-US"));
        assert_eq!(channel.copyright(), Some("2023 BD103"));
        assert_eq!(channel.generator(), None);
        assert_eq!(channel.ttl(), None);
        assert_eq!(channel.managing_editor(), None);
        assert_eq!(channel.last_build_date(), None);
        assert!(channel.image().is_none());
    }

    #[test]
    fn test_default_item() {
        let xml = to_rss_xml(&default_feed()).unwrap();
        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();

        assert_eq!(channel.items().len(), 1);
        let item = &channel.items()[0];
        assert_eq!(
            item.title(),
            Some("Intercepting Allocations with the Global Allocator")
        );
        assert_eq!(
            item.link(),
            Some("https://bd103.github.io/blog/2023-06-27-global-allocators")
        );
        assert_eq!(item.pub_date(), Some("Tue, 27 Jun 2023 00:00:00 GMT"));

        let guid = item.guid().unwrap();
        assert_eq!(guid.value(), "2023-06-27-global-allocators");
        assert!(!guid.is_permalink());
    }

    #[test]
    fn test_optional_elements_emitted_when_set() {
        let mut feed = default_feed();
        let mut options = feed.options().unwrap().clone();
        options.generator = Some("bdfeed".into());
        options.ttl = Some(60);
        options.image = Some("https://bd103.github.io/logo.png".into());
        options.updated = Some(DateTimeUtc::from_ymd(2023, 7, 1));
        options.author.email = Some("bd103@example.com".into());
        feed.set_options(options);

        let xml = to_rss_xml(&feed).unwrap();
        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();
        assert_eq!(channel.generator(), Some("bdfeed"));
        assert_eq!(channel.ttl(), Some("60"));
        assert_eq!(
            channel.image().map(|i| i.url()),
            Some("https://bd103.github.io/logo.png")
        );
        assert_eq!(
            channel.last_build_date(),
            Some("Sat, 01 Jul 2023 00:00:00 GMT")
        );
        assert_eq!(
            channel.managing_editor(),
            Some("bd103@example.com (BD103)")
        );
    }

    #[test]
    fn test_requires_options() {
        assert!(to_rss_xml(&Feed::new()).is_err());
    }

    #[test]
    fn test_rss_author() {
        let mut author = Author {
            name: "BD103".into(),
            link: "https://bd103.github.io".into(),
            email: None,
        };
        assert_eq!(rss_author(&author), None);

        author.email = Some("bd103@example.com".into());
        assert_eq!(
            rss_author(&author),
            Some("bd103@example.com (BD103)".to_string())
        );
    }
}
