//! Site configuration management for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── logo       # [logo]
//! │   └── social     # [[socials]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global provider handle
//! ├── builtin.rs     # Compiled-in site data
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section       | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `[site]`      | Site metadata (title, author, url, pagination) |
//! | `[logo]`      | Header logo image                              |
//! | `[[socials]]` | Ordered social profile links                   |

mod builtin;
pub mod section;
pub mod types;
mod util;

pub use util::{find_config_file, find_config_file_from};

// Re-export from section/
pub use section::{LogoImageSettings, Platform, SiteSettings, SocialLinkEntry};

// Re-export from types/
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, init_provider, provider,
};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Default config filename
pub const CONFIG_FILE: &str = "blog.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blog.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (empty for compiled-in data)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteSettings,

    /// Header logo
    #[serde(default)]
    pub logo: LogoImageSettings,

    /// Social links, in display order
    #[serde(default)]
    pub socials: Vec<SocialLinkEntry>,
}

impl SiteConfig {
    /// Load and validate configuration from a file.
    ///
    /// Unknown keys are reported as warnings and ignored. Any validation
    /// error aborts the load.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every section check and collect the results.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.logo.validate(&mut diag);
        section::validate_socials(&self.socials, &mut diag);
        diag
    }

    /// Validate configuration.
    ///
    /// Prints warnings and returns all collected errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    // ========================================================================
    // output
    // ========================================================================

    /// Render as a commented `blog.toml`.
    pub fn template(&self) -> Result<String, ConfigError> {
        let mut out = format!(
            "# blog configuration (blogconf v{})\n",
            env!("CARGO_PKG_VERSION")
        );

        out.push('\n');
        out.push_str(&self.site.template_with_header()?);
        out.push('\n');
        out.push_str(&self.logo.template_with_header()?);

        if !self.socials.is_empty() {
            out.push_str("\n# Social links, rendered in this order.\n");
            out.push_str("# Set `active = false` to hide an entry without deleting it.\n");
        }
        for entry in &self.socials {
            out.push_str("\n[[");
            out.push_str(SocialLinkEntry::SECTION);
            out.push_str("]]\n");
            out.push_str(&entry.template()?);
        }
        Ok(out)
    }
}

impl FromStr for SiteConfig {
    type Err = ConfigError;

    /// Parse configuration from a TOML string (no validation).
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
[site]
website = "https://example.com/"
author = "Alice"
title = "Blog"
"#;

    fn error_fields(err: ConfigError) -> Vec<String> {
        match err {
            ConfigError::Diagnostics(diag) => diag
                .errors()
                .iter()
                .map(|e| e.field.as_str().to_string())
                .collect(),
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\ntitle = \"My Blog\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = SiteConfig::from_str(MINIMAL).unwrap();
        assert_eq!(config.site.posts_per_page, 3);
        assert!(config.site.light_and_dark_mode_enabled);
        assert_eq!(config.logo, LogoImageSettings::default());
        assert!(config.socials.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_posts_per_page_rejected_at_parse() {
        let content = format!("{MINIMAL}posts_per_page = -1\n");
        assert!(matches!(
            SiteConfig::from_str(&content),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_zero_posts_per_page_rejected() {
        let content = format!("{MINIMAL}posts_per_page = 0\n");
        let config = SiteConfig::from_str(&content).unwrap();
        assert_eq!(
            error_fields(config.validate().unwrap_err()),
            ["site.posts_per_page"]
        );
    }

    #[test]
    fn test_all_errors_reported_together() {
        let content = r#"
[site]
website = "example.com"
author = "Alice"
title = "Blog"
posts_per_page = 0

[[socials]]
name = "Github"
href = "https://github.com/alice"
link_title = "Alice on Github"

[[socials]]
name = "Github"
href = "github.com/alice"
link_title = "Alice again"
"#;
        let config = SiteConfig::from_str(content).unwrap();
        assert_eq!(
            error_fields(config.validate().unwrap_err()),
            [
                "site.website",
                "site.posts_per_page",
                "socials[1].href",
                "socials[1].name"
            ]
        );
    }

    #[test]
    fn test_socials_keep_declared_order() {
        let forward = r#"
[[socials]]
name = "Twitter"
href = "https://twitter.com/a"
link_title = "t"

[[socials]]
name = "Github"
href = "https://github.com/a"
link_title = "g"
"#;
        let swapped = r#"
[[socials]]
name = "Github"
href = "https://github.com/a"
link_title = "g"

[[socials]]
name = "Twitter"
href = "https://twitter.com/a"
link_title = "t"
"#;
        let names = |content: &str| -> Vec<Platform> {
            SiteConfig::from_str(content)
                .unwrap()
                .socials
                .iter()
                .map(|s| s.platform)
                .collect()
        };
        assert_eq!(names(forward), [Platform::Twitter, Platform::Github]);
        assert_eq!(names(swapped), [Platform::Github, Platform::Twitter]);
    }

    #[test]
    fn test_active_defaults_to_true() {
        let content = r#"
[[socials]]
name = "Github"
href = "https://github.com/a"
link_title = "g"
"#;
        let config = SiteConfig::from_str(content).unwrap();
        assert!(config.socials[0].active);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = format!("{MINIMAL}colour = \"red\"\n[unknown_section]\nfield = \"value\"");
        let (config, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();

        assert_eq!(config.site.title, "Blog");
        assert!(ignored.iter().any(|f| f.contains("site.colour")));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(MINIMAL).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_sets_config_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, MINIMAL).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(config.site.author, "Alice");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = SiteConfig::load(&dir.path().join(CONFIG_FILE));
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_load_fails_fast_on_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, MINIMAL.replace("https://example.com/", "ftp://example.com/")).unwrap();

        assert_eq!(
            error_fields(SiteConfig::load(&path).unwrap_err()),
            ["site.website"]
        );
    }

    #[test]
    fn test_template_reparses_to_same_config() {
        let builtin = SiteConfig::builtin();
        let template = builtin.template().unwrap();

        let (reparsed, ignored) = SiteConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty(), "template has unknown fields: {ignored:?}");
        assert_eq!(reparsed, builtin);
        assert!(template.contains("[[socials]]\n"));
        assert!(template.contains("# Number of posts per listing page.\n"));
    }
}
