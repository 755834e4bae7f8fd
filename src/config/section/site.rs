//! `[site]` section configuration.
//!
//! Site-wide metadata read by page templates, `<meta>` tags and feed
//! descriptors.
//!
//! # Example
//!
//! ```toml
//! [site]
//! website = "https://myblog.com/"
//! author = "Alice"
//! description = "A personal blog"
//! title = "Alice's blog"
//! og_image = "og.jpg"
//! light_and_dark_mode = true
//! posts_per_page = 3
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSettings {
    /// Absolute URL of the deployed site.
    pub website: String,

    /// Author display name.
    pub author: String,

    /// Site description.
    pub description: String,

    /// Site title.
    pub title: String,

    /// Default OpenGraph image, resolved by the asset pipeline.
    #[serde(rename = "og_image")]
    #[config(name = "og_image")]
    pub og_image_filename: String,

    /// Offer a light/dark theme toggle.
    #[serde(rename = "light_and_dark_mode")]
    #[config(name = "light_and_dark_mode")]
    pub light_and_dark_mode_enabled: bool,

    /// Number of posts per listing page.
    pub posts_per_page: u32,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            website: String::new(),
            author: String::new(),
            description: String::new(),
            title: String::new(),
            og_image_filename: String::new(),
            light_and_dark_mode_enabled: true,
            posts_per_page: 3,
        }
    }
}

impl SiteSettings {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `website` must be an absolute http(s) URL with a host
    /// - `title` and `author` must not be blank
    /// - `posts_per_page` must be at least 1
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_web_url(Self::FIELDS.website, &self.website, diag);

        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "title must not be empty");
        }
        if self.author.trim().is_empty() {
            diag.error(Self::FIELDS.author, "author must not be empty");
        }

        if self.posts_per_page == 0 {
            diag.error_with_hint(
                Self::FIELDS.posts_per_page,
                "must be at least 1",
                "set a positive integer, e.g.: 3",
            );
        }
    }
}

/// Check that `value` is an absolute http(s) URL with a host.
pub(crate) fn check_web_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    if value.is_empty() {
        diag.error_with_hint(
            field,
            "URL is not configured",
            "use format like https://example.com",
        );
        return;
    }

    if !is_raw_uri(&field, value, diag) {
        return;
    }

    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            } else if parsed.host_str().is_none_or(str::is_empty) {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}

/// Reject whitespace and control characters before parsing.
///
/// `Url::parse` strips them silently, but the raw string is what consumers
/// put into `href`, so it must already be a clean URI.
pub(crate) fn is_raw_uri(
    field: &FieldPath,
    value: &str,
    diag: &mut ConfigDiagnostics,
) -> bool {
    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        diag.error_with_hint(
            field.clone(),
            format!("{value:?} contains whitespace or control characters"),
            "remove spaces, tabs and line breaks, percent-encode them if intended",
        );
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SiteSettings {
        SiteSettings {
            website: "https://example.com/".into(),
            author: "Alice".into(),
            title: "Blog".into(),
            ..SiteSettings::default()
        }
    }

    fn errors_of(settings: &SiteSettings) -> Vec<String> {
        let mut diag = ConfigDiagnostics::new();
        settings.validate(&mut diag);
        diag.errors()
            .iter()
            .map(|e| e.field.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_valid_settings() {
        assert!(errors_of(&valid()).is_empty());
    }

    #[test]
    fn test_posts_per_page_zero_rejected() {
        let settings = SiteSettings {
            posts_per_page: 0,
            ..valid()
        };
        assert_eq!(errors_of(&settings), ["site.posts_per_page"]);
    }

    #[test]
    fn test_website_rejects_bad_urls() {
        for website in ["", "not a url", "ftp://example.com", "mailto:a@b.c", "/relative"] {
            let settings = SiteSettings {
                website: website.into(),
                ..valid()
            };
            assert_eq!(errors_of(&settings), ["site.website"], "{website:?}");
        }
    }

    #[test]
    fn test_website_rejects_embedded_whitespace() {
        for website in [
            " https://example.com/",
            "https://example.com/\n",
            "https://exa\tmple.com/",
            "https://example.com/a b",
            "https://example.com/\u{7f}",
        ] {
            let settings = SiteSettings {
                website: website.into(),
                ..valid()
            };
            assert_eq!(errors_of(&settings), ["site.website"], "{website:?}");
        }
    }

    #[test]
    fn test_blank_title_and_author() {
        let settings = SiteSettings {
            title: "  ".into(),
            author: String::new(),
            ..valid()
        };
        assert_eq!(errors_of(&settings), ["site.title", "site.author"]);
    }

    #[test]
    fn test_field_paths_follow_toml_names() {
        assert_eq!(SiteSettings::FIELDS.og_image_filename.as_str(), "site.og_image");
        assert_eq!(
            SiteSettings::FIELDS.light_and_dark_mode_enabled.as_str(),
            "site.light_and_dark_mode"
        );
    }
}
