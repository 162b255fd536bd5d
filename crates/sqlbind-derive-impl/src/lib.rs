// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # sqlbind-derive-impl
//!
//! Proc-macro implementation of `#[derive(Table)]`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sqlbind::Table;
//!
//! #[derive(Table)]
//! #[table(name = "pur_order")]
//! pub struct PurOrder {
//!     #[id]
//!     #[auto]
//!     pub pur_order_id: Option<i64>,
//!
//!     pub order_no: String,
//!
//!     #[column(name = "cust_name")]
//!     pub customer: Option<String>,
//! }
//! ```
//!
//! Generates: `impl sqlbind::Table` (the compile-time mapping table plus
//! value accessors and generated-key write-back) and `impl sqlx::FromRow`
//! reading each field by its column name.

mod table;

use proc_macro::TokenStream;

/// Derive macro building the compile-time mapping table for a struct.
#[proc_macro_derive(Table, attributes(table, id, auto, column))]
pub fn derive_table(input: TokenStream) -> TokenStream {
    table::derive(input)
}
