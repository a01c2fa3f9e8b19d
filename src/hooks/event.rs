//! Hook event names.

use std::fmt;

/// A named point in the generation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    /// Fired once per generation with the feed builder.
    FeedGenerate,
}

impl HookEvent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FeedGenerate => "feed:generate",
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_name() {
        assert_eq!(HookEvent::FeedGenerate.to_string(), "feed:generate");
        assert_eq!(HookEvent::FeedGenerate.as_str(), "feed:generate");
    }
}
