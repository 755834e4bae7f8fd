//! Proc macros for blogconf.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML rendering of a value.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site-wide metadata.
//! pub struct SiteSettings {
//!     /// Absolute URL of the deployed site.
//!     pub website: String,
//!
//!     /// Filename of the default OpenGraph image.
//!     #[config(name = "og_image")]
//!     pub og_image_filename: String,
//! }
//!
//! // Generates:
//! // - SiteSettings::FIELDS.website -> FieldPath("site.website")
//! // - SiteSettings::SECTION        -> "site"
//! // - settings.template()?         -> `website = "..."` lines with doc comments
//! // - settings.template_with_header()? -> same, prefixed by `[site]`
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (required)
//!
//! Field-level:
//! - `#[config(name = "x")]` - Custom TOML field name (keep in sync with serde)

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
