//! Field information structures and parsing.

use crate::config::attr::{extract_doc_comment, get_custom_name};

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        Some(Self {
            name: ident.clone(),
            toml_name: get_custom_name(attrs).unwrap_or_else(|| ident.to_string()),
            doc: extract_doc_comment(attrs),
        })
    }

    /// Dotted path of the field within its section.
    pub fn full_path(&self, section: &str) -> String {
        format!("{}.{}", section, self.toml_name)
    }
}
