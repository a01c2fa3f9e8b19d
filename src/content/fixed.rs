//! Entries declared up front.

use super::{ContentError, ContentMetadata, ContentSource};

/// Returns its entries in declaration order.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    entries: Vec<ContentMetadata>,
}

impl FixedSource {
    pub fn new(entries: Vec<ContentMetadata>) -> Self {
        Self { entries }
    }
}

impl ContentSource for FixedSource {
    fn list_published(&self) -> Result<Vec<ContentMetadata>, ContentError> {
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::DateTimeUtc;

    #[test]
    fn test_lists_in_declaration_order_every_time() {
        let entry = |id: &str, day| ContentMetadata {
            title: id.into(),
            id: id.into(),
            date: DateTimeUtc::from_ymd(2023, 6, day),
            link: None,
        };
        let source = FixedSource::new(vec![entry("old", 1), entry("new", 30)]);

        let first = source.list_published().unwrap();
        let second = source.list_published().unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].id, "old");
        assert_eq!(first[1].id, "new");
    }

    #[test]
    fn test_empty() {
        assert!(FixedSource::default().list_published().unwrap().is_empty());
    }
}
