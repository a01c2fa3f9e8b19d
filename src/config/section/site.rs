//! `[site]` section: feed identity, author and copyright.

use crate::{config::ConfigDiagnostics, feed::Author, utils::date::DateTimeUtc};
use serde::{Deserialize, Serialize};

/// `[site]` section in feed.toml.
///
/// # Example
/// ```toml
/// [site]
/// id = "https://bd103.github.io"
/// title = "BD103's Blog"
/// url = "https://bd103.github.io"
/// language = "en-US"
///
/// [site.author]
/// name = "BD103"
/// link = "https://bd103.github.io"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Feed identifier URI.
    pub id: String,

    /// Feed title.
    pub title: String,

    /// Canonical site link.
    pub url: String,

    /// BCP 47 language tag.
    pub language: String,

    pub description: String,

    pub copyright: String,

    /// Pinned feed update time. Derived from the newest entry when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTimeUtc>,

    pub author: Author,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            id: "https://bd103.github.io".into(),
            title: "BD103's Blog".into(),
            url: "https://bd103.github.io".into(),
            language: "en-US".into(),
            description: "BD103's technical blog about programming!".into(),
            copyright: "2023 BD103".into(),
            updated: None,
            author: Author {
                name: "BD103".into(),
                link: "https://bd103.github.io".into(),
                email: None,
            },
        }
    }
}

impl SiteInfoConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            ("site.id", &self.id),
            ("site.title", &self.title),
            ("site.author.name", &self.author.name),
        ] {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            }
        }

        diag.check_url("site.url", &self.url);
        diag.check_url("site.author.link", &self.author.link);

        if let Some(email) = &self.author.email
            && !email.contains('@')
        {
            diag.error_with_hint(
                "site.author.email",
                format!("'{email}' is not an email address"),
                "use format like name@example.com, or remove the field",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let site = &config.site;
        assert_eq!(site.id, "https://bd103.github.io");
        assert_eq!(site.title, "BD103's Blog");
        assert_eq!(site.url, "https://bd103.github.io");
        assert_eq!(site.language, "en-US");
        assert_eq!(site.description, "BD103's technical blog about programming!");
        assert_eq!(site.copyright, "2023 BD103");
        assert_eq!(site.author.name, "BD103");
        assert_eq!(site.author.link, "https://bd103.github.io");
        assert_eq!(site.updated, None);
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            r#"
            [site]
            title = "Other Blog"
            updated = "2024-01-01"

            [site.author]
            name = "Alice"
            link = "https://alice.dev"
            email = "alice@example.com"
        "#,
        );
        assert_eq!(config.site.title, "Other Blog");
        assert_eq!(config.site.id, "https://bd103.github.io");
        assert_eq!(config.site.author.email.as_deref(), Some("alice@example.com"));
        assert_eq!(config.site.updated.unwrap().to_string(), "2024-01-01");
    }

    #[test]
    fn test_validate_defaults_ok() {
        let mut diag = ConfigDiagnostics::new();
        test_parse_config("").site.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let config = test_parse_config(
            r#"
            [site]
            title = ""
            url = "ftp://bd103.github.io"

            [site.author]
            name = "BD103"
            link = "not a url"
            email = "nobody"
        "#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            ["site.title", "site.url", "site.author.link", "site.author.email"]
        );
    }
}
