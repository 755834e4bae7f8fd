//! `[logo]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [logo]
//! enable = false
//! svg = true
//! width = 216
//! height = 46
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Logo image shown in the header instead of the text title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "logo")]
pub struct LogoImageSettings {
    /// Show the logo image instead of the site title.
    #[serde(rename = "enable")]
    #[config(name = "enable")]
    pub enabled: bool,

    /// Use the SVG logo rather than a raster image.
    #[serde(rename = "svg")]
    #[config(name = "svg")]
    pub use_vector_format: bool,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,
}

impl Default for LogoImageSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            use_vector_format: true,
            width: 216,
            height: 46,
        }
    }
}

impl LogoImageSettings {
    /// Validate logo dimensions (both must be positive).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.width == 0 {
            diag.error(Self::FIELDS.width, "logo width must be at least 1 pixel");
        }
        if self.height == 0 {
            diag.error(Self::FIELDS.height, "logo height must be at least 1 pixel");
        }
    }
}
