//! Configuration section definitions.

mod content;
mod feed;
mod site;

pub use content::{ContentConfig, SourceKind};
pub use feed::FeedConfig;
pub use site::SiteInfoConfig;
