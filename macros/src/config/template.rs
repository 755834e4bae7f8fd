//! Template generation code for Config derive macro.
//!
//! The generated code renders the current value of `self`, so a fully
//! populated config can be written back out as a commented TOML file.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;

/// Generate template code (TokenStream) for fields
pub fn generate_template_code(fields: &[FieldInfo]) -> TokenStream {
    let field_codes = fields.iter().map(generate_field_template_code);

    quote! {
        #(#field_codes)*
    }
}

fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;

    let doc_code = match &info.doc {
        Some(doc) => {
            let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#doc_str); }
        }
        None => quote! {},
    };

    quote! {
        #doc_code
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(&self.#field_name)?.to_string());
        out.push('\n');
    }
}
