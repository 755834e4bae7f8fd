//! Configuration provider.
//!
//! Holds one validated, immutable [`SiteConfig`] and hands out read-only
//! views of it. A `Provider` only exists for configuration that passed
//! validation, so its accessors cannot fail.

use crate::config::{
    ConfigError, LogoImageSettings, SiteConfig, SiteSettings, SocialLinkEntry,
    find_config_file,
};
use crate::debug;
use std::path::Path;
use std::sync::Arc;

/// Validated, read-only site configuration.
///
/// Cloning is cheap and clones share the same data, so render tasks
/// running in parallel can each hold one.
#[derive(Debug, Clone)]
pub struct Provider {
    config: Arc<SiteConfig>,
}

impl Provider {
    /// Validate `config` and freeze it.
    pub fn new(config: SiteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Provider over the compiled-in site data.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(SiteConfig::builtin())
    }

    /// Load, validate and freeze the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = SiteConfig::load(path)?;
        debug!("config"; "loaded {}", path.display());
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Search upward from the working directory for `config_name` and load it.
    pub fn discover(config_name: &Path) -> Result<Self, ConfigError> {
        match find_config_file(config_name) {
            Some(path) => Self::load(&path),
            None => Err(ConfigError::NotFound(config_name.to_path_buf())),
        }
    }

    /// Site-wide metadata.
    #[inline]
    pub fn site_settings(&self) -> &SiteSettings {
        &self.config.site
    }

    /// Logo settings.
    #[inline]
    pub fn logo_image_settings(&self) -> &LogoImageSettings {
        &self.config.logo
    }

    /// Every social link in declaration order, inactive ones included.
    #[inline]
    pub fn social_links(&self) -> &[SocialLinkEntry] {
        &self.config.socials
    }

    /// The whole configuration.
    #[inline]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}
