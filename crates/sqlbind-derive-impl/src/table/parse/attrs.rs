// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing with darling.
//!
//! This module defines the internal [`TableAttrs`] structure used for
//! parsing `#[table(...)]` attributes. This is an implementation detail;
//! the public API uses [`TableDef`](super::TableDef).
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `name` | No | underscore form of the struct name | Database table name |

use darling::FromDeriveInput;
use syn::Ident;

/// Struct-level attributes parsed from `#[table(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(table), supports(struct_named), allow_unknown_fields)]
pub struct TableAttrs {
    /// Struct identifier (e.g., `PurOrder`).
    pub ident: Ident,

    /// Database table name.
    ///
    /// Defaults to the underscore form of the struct name, so `PurOrder`
    /// maps to `pur_order`.
    #[darling(default)]
    pub name: Option<String>,
}
