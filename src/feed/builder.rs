//! Mutable feed accumulator handed to `feed:generate` handlers.

use super::{FeedError, FeedItem, FeedOptions};
use crate::utils::date::DateTimeUtc;
use rustc_hash::FxHashSet;

/// Capabilities a `feed:generate` handler may use.
pub trait FeedBuilder {
    /// Replace the feed-wide options wholesale.
    fn set_options(&mut self, options: FeedOptions);

    /// Append an entry. Insertion order is output order.
    fn add_item(&mut self, item: FeedItem) -> Result<(), FeedError>;
}

/// In-memory feed consumed by the rss/atom renderers.
///
/// Rejects items added before any options and items whose id is already
/// present.
#[derive(Debug, Default)]
pub struct Feed {
    options: Option<FeedOptions>,
    items: Vec<FeedItem>,
    ids: FxHashSet<String>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> Option<&FeedOptions> {
        self.options.as_ref()
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    /// Feed options, or `MissingOptions` when no handler set them.
    pub fn require_options(&self) -> Result<&FeedOptions, FeedError> {
        self.options.as_ref().ok_or(FeedError::MissingOptions)
    }

    /// `options.updated` if set, otherwise the newest item date.
    pub fn last_updated(&self) -> Option<DateTimeUtc> {
        self.options
            .as_ref()
            .and_then(|o| o.updated)
            .or_else(|| self.items.iter().map(|item| item.date).max())
    }
}

impl FeedBuilder for Feed {
    fn set_options(&mut self, options: FeedOptions) {
        self.options = Some(options);
    }

    fn add_item(&mut self, item: FeedItem) -> Result<(), FeedError> {
        if self.options.is_none() {
            return Err(FeedError::MissingOptions);
        }
        if !self.ids.insert(item.id.clone()) {
            return Err(FeedError::DuplicateId(item.id));
        }
        self.items.push(item);
        Ok(())
    }
}
