// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsing of the derive input into a [`TableDef`].
//!
//! All mapping validation happens here, once, at macro expansion:
//!
//! - the input is a named struct
//! - exactly one field carries `#[id]`
//! - `#[auto]` sits on the identifier and the identifier is an integer
//!   type the generated key can be written back into
//! - the identifier is not skipped
//!
//! Code generators receive a `TableDef` and never re-validate.

mod attrs;
mod field;


use darling::FromDeriveInput;
use syn::{DeriveInput, Ident};

use sqlbind_core::naming;

use self::attrs::TableAttrs;
pub use self::field::{FieldDef, IntKind};

/// Complete parsed table definition.
///
/// This is the data structure passed to all code generators.
#[derive(Debug)]
pub struct TableDef {
    /// Struct identifier (e.g., `PurOrder`).
    pub ident: Ident,

    /// Database table name (e.g., `"pur_order"`).
    pub table: String,

    /// All named fields, in declaration order.
    pub fields: Vec<FieldDef>,

    /// Index of the identifier field within `fields`.
    pub id_field_index: usize,
}

impl TableDef {
    /// Parse a table definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// Darling errors for non-structs, tuple structs, a missing or
    /// duplicated `#[id]`, `#[auto]` off the identifier or on a
    /// non-integer identifier, and a skipped identifier.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = TableAttrs::from_derive_input(input)?;

        let fields: Vec<FieldDef> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Table requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(darling::Error::custom("Table can only be derived for structs")
                    .with_span(&input.ident));
            }
        };

        let mut id_fields = fields.iter().enumerate().filter(|(_, f)| f.is_id);
        let id_field_index = match id_fields.next() {
            Some((index, _)) => index,
            None => {
                return Err(darling::Error::custom(
                    "Table must have exactly one field with #[id] attribute",
                )
                .with_span(&input.ident));
            }
        };
        if let Some((_, duplicate)) = id_fields.next() {
            return Err(darling::Error::custom("Table allows only one #[id] field")
                .with_span(&duplicate.ident));
        }

        let id = &fields[id_field_index];
        if id.skip {
            return Err(
                darling::Error::custom("the identifier field cannot be skipped")
                    .with_span(&id.ident),
            );
        }
        if id.is_auto && id.int_kind().is_none() {
            return Err(darling::Error::custom(
                "#[auto] requires an integer identifier (i16, i32, i64 or Option of those)",
            )
            .with_span(&id.ident));
        }
        if let Some(stray) = fields.iter().find(|f| f.is_auto && !f.is_id) {
            return Err(
                darling::Error::custom("#[auto] requires #[id] on the same field")
                    .with_span(&stray.ident),
            );
        }

        let table = attrs
            .name
            .unwrap_or_else(|| naming::to_underscore(&attrs.ident.to_string()));

        Ok(Self {
            ident: attrs.ident,
            table,
            fields,
            id_field_index,
        })
    }

    /// The identifier field.
    pub fn id_field(&self) -> &FieldDef {
        &self.fields[self.id_field_index]
    }

    /// Declared non-identifier columns, in declaration order.
    pub fn data_fields(&self) -> Vec<&FieldDef> {
        self.fields
            .iter()
            .filter(|f| !f.is_id && !f.skip)
            .collect()
    }

    /// Fields read back from a result row (identifier included).
    pub fn row_fields(&self) -> Vec<&FieldDef> {
        self.fields.iter().filter(|f| !f.skip).collect()
    }

    /// Fields excluded from the mapping, filled from `Default` on reads.
    pub fn skipped_fields(&self) -> Vec<&FieldDef> {
        self.fields.iter().filter(|f| f.skip).collect()
    }
}
