// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `impl sqlx::FromRow` generation.
//!
//! Result rows map back onto the mapped type by column name, the same
//! names the mapping table declares. This is the conventional
//! underscore-aware matching: a `customer` field with
//! `#[column(name = "cust_name")]` reads the `cust_name` column, an
//! unannotated `order_no` field reads `order_no`.
//!
//! Skipped fields are not read from the row; they are filled from
//! `Default`, so their types must implement it.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::TableDef;

/// Generate the `impl sqlx::FromRow<PgRow>` block.
pub fn generate(def: &TableDef) -> TokenStream {
    let ident = &def.ident;

    let row_reads = def.row_fields().into_iter().map(|f| {
        let field = &f.ident;
        let column = f.column_name();
        quote! { #field: ::sqlbind::sqlx::Row::try_get(row, #column)? }
    });
    let skipped = def.skipped_fields().into_iter().map(|f| {
        let field = &f.ident;
        quote! { #field: ::core::default::Default::default() }
    });

    quote! {
        #[automatically_derived]
        impl<'r> ::sqlbind::sqlx::FromRow<'r, ::sqlbind::sqlx::postgres::PgRow> for #ident {
            fn from_row(
                row: &'r ::sqlbind::sqlx::postgres::PgRow
            ) -> ::core::result::Result<Self, ::sqlbind::sqlx::Error> {
                ::core::result::Result::Ok(Self {
                    #(#row_reads,)*
                    #(#skipped,)*
                })
            }
        }
    }
}
