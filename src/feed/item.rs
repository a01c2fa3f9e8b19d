//! A single feed entry.

use crate::utils::date::DateTimeUtc;
use serde::Serialize;

/// One entry of the feed, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub title: String,
    /// Unique within the feed.
    pub id: String,
    pub link: String,
    pub date: DateTimeUtc,
}
