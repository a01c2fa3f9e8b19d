//! `query` command: print the generated feed.

use super::{QueryArgs, QueryFormat, build::generate_feed};
use crate::{
    config::SiteConfig,
    feed::{Feed, FeedFormat, FeedItem, FeedOptions},
    generator::feed::render,
};
use anyhow::Result;
use serde::Serialize;
use std::io::{Write, stdout};

#[derive(Serialize)]
struct FeedDump<'a> {
    options: &'a FeedOptions,
    items: &'a [FeedItem],
}

pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    write_query(&mut stdout().lock(), args.format, config)
}

/// Write the document alone; logs go to stderr so `out` stays parseable.
fn write_query(out: &mut impl Write, format: QueryFormat, config: &SiteConfig) -> Result<()> {
    let feed = generate_feed(config)?;
    writeln!(out, "{}", format_feed(&feed, format)?)?;
    out.flush()?;
    Ok(())
}

fn format_feed(feed: &Feed, format: QueryFormat) -> Result<String> {
    match format {
        QueryFormat::Json => Ok(serde_json::to_string_pretty(&FeedDump {
            options: feed.require_options()?,
            items: feed.items(),
        })?),
        QueryFormat::Rss2 => render(feed, FeedFormat::Rss2),
        QueryFormat::Atom => render(feed, FeedFormat::Atom),
    }
}
