// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Table derive macro implementation.
//!
//! This module contains all code generation logic for `#[derive(Table)]`.

mod meta_gen;
mod parse;
mod row_gen;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use self::parse::TableDef;

/// Main entry point for the Table derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match TableDef::from_derive_input(&input) {
        Ok(def) => generate(def),
        Err(err) => err.write_errors().into(),
    }
}

/// Generate all code for the mapped type.
fn generate(def: TableDef) -> TokenStream {
    let meta_tokens = meta_gen::generate(&def);
    let row_tokens = row_gen::generate(&def);

    let expanded = quote! {
        #meta_tokens
        #row_tokens
    };

    expanded.into()
}
