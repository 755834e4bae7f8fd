//! blogconf - validated, immutable configuration for a personal blog.
//!
//! The site generator asks a [`Provider`] for the site metadata, the logo
//! settings and the ordered list of social links. A provider is built once
//! at startup from `blog.toml` or the compiled-in data and never changes.
//!
//! ```no_run
//! let provider = blogconf::Provider::builtin()?;
//! let visible = provider.social_links().iter().filter(|link| link.active);
//! # Ok::<(), blogconf::config::ConfigError>(())
//! ```

pub mod config;
pub mod logger;
pub mod provider;

pub use config::SiteConfig;
pub use provider::Provider;
