//! Document generators for feed output.
//!
//! - **Feed**: RSS 2.0 and Atom 1.0 documents (`feed.xml`, `atom.xml`)
//!
//! Generators only read the populated `Feed`; they never touch hooks.

pub mod feed;

use std::borrow::Cow;

/// Drop indentation and line breaks between elements when enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if !enabled {
        return Cow::Borrowed(content);
    }

    let minified: String = String::from_utf8_lossy(content)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    Cow::Owned(minified.into_bytes())
}
