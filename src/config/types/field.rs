//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors. Entries of an array of tables get an owned,
/// indexed path via [`FieldPath::indexed`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteSettings {
///     pub website: String,
/// }
///
/// // Generated:
/// impl SiteSettings {
///     pub const FIELDS: SiteSettingsFields = ...;
/// }
///
/// // Usage:
/// diag.error(SiteSettings::FIELDS.website, "required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Insert an array index after the section part of the path.
    ///
    /// `socials.href` with index 4 becomes `socials[4].href`.
    pub fn indexed(self, index: usize) -> Self {
        let path = match self.0.rsplit_once('.') {
            Some((section, field)) => format!("{section}[{index}].{field}"),
            None => format!("{}[{index}]", self.0),
        };
        Self(Cow::Owned(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_path() {
        let path = FieldPath::new("socials.href").indexed(4);
        assert_eq!(path.as_str(), "socials[4].href");
    }

    #[test]
    fn test_indexed_bare_section() {
        let path = FieldPath::new("socials").indexed(0);
        assert_eq!(path.as_str(), "socials[0]");
    }
}
