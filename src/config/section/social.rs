//! `[[socials]]` configuration.
//!
//! Ordered social profile links. Declaration order is display order.
//! Inactive entries stay in the list so they can be re-enabled without
//! retyping the URL; consumers skip them when rendering.
//!
//! # Example
//!
//! ```toml
//! [[socials]]
//! name = "Github"
//! href = "https://github.com/alice"
//! link_title = "Alice on Github"
//! active = true
//!
//! [[socials]]
//! name = "Mail"
//! href = "mailto:alice@example.com"
//! link_title = "Send an email to Alice"
//! active = false
//! ```

use super::site::{check_web_url, is_raw_uri};
use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known social platforms. The consumer uses the name to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Github,
    Facebook,
    Instagram,
    LinkedIn,
    Mail,
    Twitter,
    Twitch,
    YouTube,
    WhatsApp,
    Snapchat,
    Pinterest,
    TikTok,
    CodePen,
    Discord,
    GitLab,
    Reddit,
    Skype,
    Steam,
    Telegram,
    Mastodon,
}

impl Platform {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Github => "Github",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
            Self::Mail => "Mail",
            Self::Twitter => "Twitter",
            Self::Twitch => "Twitch",
            Self::YouTube => "YouTube",
            Self::WhatsApp => "WhatsApp",
            Self::Snapchat => "Snapchat",
            Self::Pinterest => "Pinterest",
            Self::TikTok => "TikTok",
            Self::CodePen => "CodePen",
            Self::Discord => "Discord",
            Self::GitLab => "GitLab",
            Self::Reddit => "Reddit",
            Self::Skype => "Skype",
            Self::Steam => "Steam",
            Self::Telegram => "Telegram",
            Self::Mastodon => "Mastodon",
        }
    }

    /// Mail links are `mailto:` URIs, everything else is a web profile.
    #[inline]
    pub const fn uses_mailto(&self) -> bool {
        matches!(self, Self::Mail)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One social link entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "socials")]
pub struct SocialLinkEntry {
    /// Platform name (selects the icon).
    #[serde(rename = "name")]
    #[config(name = "name")]
    pub platform: Platform,

    /// Profile URL, or a `mailto:` URI for Mail.
    pub href: String,

    /// Accessible label for the link.
    pub link_title: String,

    /// Render this entry.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl SocialLinkEntry {
    pub fn new(
        platform: Platform,
        href: impl Into<String>,
        link_title: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            platform,
            href: href.into(),
            link_title: link_title.into(),
            active,
        }
    }

    fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let href = Self::FIELDS.href.indexed(index);
        if self.platform.uses_mailto() {
            check_mailto(href, &self.href, diag);
        } else {
            check_web_url(href, &self.href, diag);
        }

        if self.link_title.trim().is_empty() {
            diag.warn(
                Self::FIELDS.link_title.indexed(index),
                format!(
                    "{} link has no title, screen readers will only see the URL",
                    self.platform
                ),
            );
        }
    }
}

/// Validate the whole list: every href, and platform uniqueness.
pub fn validate_socials(entries: &[SocialLinkEntry], diag: &mut ConfigDiagnostics) {
    let mut first_seen: FxHashMap<Platform, usize> = FxHashMap::default();

    for (index, entry) in entries.iter().enumerate() {
        entry.validate(index, diag);

        if let Some(first) = first_seen.get(&entry.platform) {
            diag.error_with_hint(
                SocialLinkEntry::FIELDS.platform.indexed(index),
                format!(
                    "duplicate platform '{}', already declared at socials[{}]",
                    entry.platform, first
                ),
                "keep one entry per platform, set `active = false` to hide one",
            );
        } else {
            first_seen.insert(entry.platform, index);
        }
    }
}

fn check_mailto(field: crate::config::FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    const HINT: &str = "use format like mailto:someone@example.com";

    if !is_raw_uri(&field, value, diag) {
        return;
    }

    match url::Url::parse(value) {
        Ok(parsed) if parsed.scheme() != "mailto" => {
            diag.error_with_hint(
                field,
                format!("scheme '{}' not supported, Mail links must use mailto", parsed.scheme()),
                HINT,
            );
        }
        Ok(parsed) => {
            let address = parsed.path();
            let valid = address
                .split_once('@')
                .is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty());
            if !valid {
                diag.error_with_hint(field, format!("'{address}' is not an email address"), HINT);
            }
        }
        Err(e) => {
            diag.error_with_hint(field, format!("invalid URI: {}", e), HINT);
        }
    }
}
