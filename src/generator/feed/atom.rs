//! Atom 1.0 feed rendering.

use crate::{
    feed::{Feed, FeedFormat, FeedItem},
    utils::date::DateTimeUtc,
};
use anyhow::{Context, Result};
use atom_syndication::{
    Entry, EntryBuilder, FixedDateTime, GeneratorBuilder, Link, LinkBuilder, Person,
    PersonBuilder, Text,
};

/// `<updated>` of a feed with no pinned time and no entries.
const EPOCH: DateTimeUtc = DateTimeUtc::from_ymd(1970, 1, 1);

/// Render the feed as an Atom 1.0 document.
pub fn to_atom_xml(feed: &Feed) -> Result<String> {
    let options = feed.require_options()?;

    let entries = feed
        .items()
        .iter()
        .map(to_atom_entry)
        .collect::<Result<Vec<Entry>>>()?;

    let author: Person = PersonBuilder::default()
        .name(options.author.name.clone())
        .uri(Some(options.author.link.clone()))
        .email(options.author.email.clone())
        .build();

    let mut links: Vec<Link> = vec![
        LinkBuilder::default()
            .href(options.feed_links.atom.clone())
            .rel("self".to_string())
            .mime_type(Some(FeedFormat::Atom.mime_type().to_string()))
            .build(),
        LinkBuilder::default()
            .href(options.link.clone())
            .rel("alternate".to_string())
            .build(),
    ];
    if let Some(hub) = &options.hub {
        links.push(
            LinkBuilder::default()
                .href(hub.clone())
                .rel("hub".to_string())
                .build(),
        );
    }

    let generator = options
        .generator
        .as_ref()
        .map(|name| GeneratorBuilder::default().value(name.clone()).build());

    let atom = atom_syndication::FeedBuilder::default()
        .title(Text::plain(options.title.clone()))
        .id(options.id.clone())
        .updated(to_fixed(feed.last_updated().unwrap_or(EPOCH))?)
        .authors(vec![author])
        .links(links)
        .subtitle(non_empty(&options.description).map(Text::plain))
        .rights(non_empty(&options.copyright).map(Text::plain))
        .generator(generator)
        .icon(options.favicon.clone())
        .logo(options.image.clone())
        .lang(options.language.clone())
        .entries(entries)
        .build();

    Ok(atom.to_string())
}

fn to_atom_entry(item: &FeedItem) -> Result<Entry> {
    let date = to_fixed(item.date)?;

    let link: Link = LinkBuilder::default()
        .href(item.link.clone())
        .rel("alternate".to_string())
        .build();

    Ok(EntryBuilder::default()
        .title(Text::plain(item.title.clone()))
        .id(item.id.clone())
        .updated(date)
        .published(Some(date))
        .links(vec![link])
        .build())
}

fn to_fixed(dt: DateTimeUtc) -> Result<FixedDateTime> {
    dt.to_rfc3339()
        .parse()
        .with_context(|| format!("invalid atom date `{dt}`"))
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
