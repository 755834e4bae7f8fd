//! Config derive macro - generates FIELDS and template().

mod attr;
mod field;
mod template;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use attr::{extract_doc_comment, get_section};
use field::FieldInfo;
use template::generate_template_code;

/// Generate Config implementation (FIELDS + template).
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let Some(section) = get_section(&input.attrs) else {
        return quote! { compile_error!("Config requires #[config(section = \"...\")]"); };
    };
    let section_doc = extract_doc_comment(&input.attrs).unwrap_or_default();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let field_infos: Vec<FieldInfo> = fields.iter().filter_map(FieldInfo::from_field).collect();

    let field_defs = field_infos.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = field_infos.iter().map(|f| {
        let name = &f.name;
        let full_path = f.full_path(&section);
        quote! { #name: crate::config::FieldPath::new(#full_path), }
    });

    let template_code = generate_template_code(&field_infos);

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };

            /// Section name for TOML output.
            pub const SECTION: &'static str = #section;

            /// Section documentation.
            pub const SECTION_DOC: &'static str = #section_doc;

            /// Render this value as TOML key/value lines with doc comments.
            pub fn template(&self) -> Result<String, toml::ser::Error> {
                let mut out = String::new();
                #template_code
                Ok(out)
            }

            /// Render this value with its `[section]` header.
            pub fn template_with_header(&self) -> Result<String, toml::ser::Error> {
                let mut out = String::new();
                for line in Self::SECTION_DOC.lines() {
                    out.push_str("# ");
                    out.push_str(line.trim());
                    out.push('\n');
                }
                out.push('[');
                out.push_str(Self::SECTION);
                out.push_str("]\n");
                out.push_str(&self.template()?);
                Ok(out)
            }
        }
    }
}
