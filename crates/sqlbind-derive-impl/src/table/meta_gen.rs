// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `impl Table` generation.
//!
//! Emits the `'static` mapping table and the value accessors the SQL
//! builders consume:
//!
//! ```rust,ignore
//! impl ::sqlbind::Table for PurOrder {
//!     fn meta() -> &'static ::sqlbind::TableMeta { /* static META */ }
//!     fn id_value(&self) -> ::sqlbind::SqlValue { /* id field */ }
//!     fn values(&self) -> Vec<::sqlbind::SqlValue> { /* declared columns */ }
//!     fn column_value(&self, column: &str) -> Option<::sqlbind::SqlValue> { /* by name */ }
//!     fn set_generated_key(&mut self, key: i64) { /* auto ids only */ }
//! }
//! ```
//!
//! Field values convert through `SqlValue::from(self.field.clone())`, so
//! every mapped field type must convert into
//! [`SqlValue`](sqlbind_core::SqlValue).

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{IntKind, TableDef};

/// Generate the `impl ::sqlbind::Table` block.
pub fn generate(def: &TableDef) -> TokenStream {
    let ident = &def.ident;
    let table = &def.table;

    let id = def.id_field();
    let id_ident = &id.ident;
    let id_column = id.column_name();
    let id_field_name = id.ident.to_string();
    let auto = id.is_auto;

    let columns = def.data_fields();
    let column_metas = columns.iter().map(|f| {
        let name = f.column_name();
        let field = f.ident.to_string();
        quote! { ::sqlbind::ColumnMeta { name: #name, field: #field } }
    });
    let values = columns.iter().map(|f| {
        let field = &f.ident;
        quote! { ::sqlbind::SqlValue::from(self.#field.clone()) }
    });
    let column_arms = columns.iter().map(|f| {
        let name = f.column_name();
        let field = &f.ident;
        quote! {
            #name => ::core::option::Option::Some(::sqlbind::SqlValue::from(self.#field.clone()))
        }
    });

    let set_key = generated_key_impl(def);

    quote! {
        #[automatically_derived]
        impl ::sqlbind::Table for #ident {
            fn meta() -> &'static ::sqlbind::TableMeta {
                static META: ::sqlbind::TableMeta = ::sqlbind::TableMeta {
                    table: #table,
                    id: ::sqlbind::IdMeta {
                        column: #id_column,
                        field: #id_field_name,
                        auto: #auto,
                    },
                    columns: &[#(#column_metas),*],
                };
                &META
            }

            fn id_value(&self) -> ::sqlbind::SqlValue {
                ::sqlbind::SqlValue::from(self.#id_ident.clone())
            }

            fn values(&self) -> ::std::vec::Vec<::sqlbind::SqlValue> {
                ::std::vec![#(#values),*]
            }

            fn column_value(&self, column: &str) -> ::core::option::Option<::sqlbind::SqlValue> {
                match column {
                    #(#column_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            #set_key
        }
    }
}

/// Generated-key write-back for auto identifiers.
///
/// Non-auto identifiers keep the trait's no-op default.
fn generated_key_impl(def: &TableDef) -> TokenStream {
    let id = def.id_field();
    if !id.is_auto {
        return TokenStream::new();
    }

    let id_ident = &id.ident;
    // validated during parsing, auto implies an integer kind
    let Some((optional, kind)) = id.int_kind() else {
        return TokenStream::new();
    };

    let assign = match (optional, kind) {
        (false, IntKind::I64) => quote! { self.#id_ident = key; },
        (false, IntKind::I32) => quote! { self.#id_ident = key as i32; },
        (false, IntKind::I16) => quote! { self.#id_ident = key as i16; },
        (true, IntKind::I64) => quote! { self.#id_ident = ::core::option::Option::Some(key); },
        (true, IntKind::I32) => {
            quote! { self.#id_ident = ::core::option::Option::Some(key as i32); }
        }
        (true, IntKind::I16) => {
            quote! { self.#id_ident = ::core::option::Option::Some(key as i16); }
        }
    };

    quote! {
        fn set_generated_key(&mut self, key: i64) {
            #assign
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse::TableDef;

    fn parse(tokens: syn::DeriveInput) -> TableDef {
        TableDef::from_derive_input(&tokens).unwrap()
    }

    #[test]
    fn meta_carries_table_and_columns() {
        let def = parse(syn::parse_quote! {
            #[table(name = "pur_order")]
            pub struct PurOrder {
                #[id]
                #[auto]
                pub pur_order_id: Option<i64>,
                pub order_no: String,
                #[column(name = "cust_name")]
                pub customer: Option<String>,
            }
        });
        let output = generate(&def).to_string();
        assert!(output.contains("\"pur_order\""));
        assert!(output.contains("\"order_no\""));
        assert!(output.contains("\"cust_name\""));
        assert!(output.contains("auto : true"));
    }

    #[test]
    fn auto_id_gets_key_write_back() {
        let def = parse(syn::parse_quote! {
            pub struct PurOrder {
                #[id]
                #[auto]
                pub pur_order_id: Option<i64>,
                pub order_no: String,
            }
        });
        let output = generate(&def).to_string();
        assert!(output.contains("fn set_generated_key"));
        assert!(output.contains("Some (key)"));
    }

    #[test]
    fn narrow_auto_id_narrows_the_key() {
        let def = parse(syn::parse_quote! {
            pub struct Tag {
                #[id]
                #[auto]
                pub tag_id: i32,
                pub label: String,
            }
        });
        let output = generate(&def).to_string();
        assert!(output.contains("key as i32"));
    }

    #[test]
    fn plain_id_keeps_default_write_back() {
        let def = parse(syn::parse_quote! {
            pub struct Tag {
                #[id]
                pub tag_id: i64,
                pub label: String,
            }
        });
        let output = generate(&def).to_string();
        assert!(!output.contains("fn set_generated_key"));
        assert!(output.contains("auto : false"));
    }

    #[test]
    fn skipped_field_is_not_a_column() {
        let def = parse(syn::parse_quote! {
            pub struct Account {
                #[id]
                pub account_id: i64,
                pub login: String,
                #[column(skip)]
                pub cached_rank: i32,
            }
        });
        let output = generate(&def).to_string();
        assert!(!output.contains("cached_rank"));
    }
}
