//! Feed data model and the `feed:generate` handler that fills it.
//!
//! - `options`: feed-wide metadata (`FeedOptions`)
//! - `item`: one entry (`FeedItem`)
//! - `builder`: the mutable accumulator (`FeedBuilder`, `Feed`)
//! - `configurator`: populates a builder from config and content

mod builder;
mod configurator;
mod item;
mod options;

pub use builder::{Feed, FeedBuilder};
pub use configurator::FeedConfigurator;
pub use item::FeedItem;
pub use options::{Author, FeedFormat, FeedLinks, FeedOptions};

use crate::content::ContentError;
use thiserror::Error;

/// Errors raised while populating a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed options must be set before adding items")]
    MissingOptions,

    #[error("duplicate feed item id `{0}`")]
    DuplicateId(String),

    #[error("failed to list published content")]
    Content(#[from] ContentError),
}
