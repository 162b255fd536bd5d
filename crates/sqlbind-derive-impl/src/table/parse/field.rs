// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! This module handles parsing of field attributes: `#[id]`, `#[auto]`,
//! and `#[column(name = "...")]` / `#[column(skip)]`.
//!
//! # Attribute Flags
//!
//! | Field | Attribute | Effect |
//! |-------|-----------|--------|
//! | `is_id` | `#[id]` | Identifier column |
//! | `is_auto` | `#[auto]` | Database generates the key on insert |
//! | `column` | `#[column(name = "x")]` | Explicit column name |
//! | `skip` | `#[column(skip)]` | Excluded from the mapping |

use syn::{Field, GenericArgument, Ident, PathArguments, Type};

use sqlbind_core::naming;

/// Integer width of an auto-generated identifier field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntKind {
    /// `i16` or `Option<i16>`.
    I16,
    /// `i32` or `Option<i32>`.
    I32,
    /// `i64` or `Option<i64>`.
    I64,
}

/// Field definition with all parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier (e.g., `pur_order_id`, `order_no`).
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Whether this is the identifier field (`#[id]`).
    pub is_id: bool,

    /// Whether the database generates this field on insert (`#[auto]`).
    pub is_auto: bool,

    /// Explicit column name from `#[column(name = "...")]`.
    pub column: Option<String>,

    /// Excluded from the mapping (`#[column(skip)]`).
    pub skip: bool,
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Unnamed fields and malformed `#[column(...)]` attributes produce
    /// darling errors carrying the offending span.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| darling::Error::custom("Table requires named fields").with_span(field))?;
        let ty = field.ty.clone();

        let mut is_id = false;
        let mut is_auto = false;
        let mut column = None;
        let mut skip = false;

        for attr in &field.attrs {
            if attr.path().is_ident("id") {
                is_id = true;
            } else if attr.path().is_ident("auto") {
                is_auto = true;
            } else if attr.path().is_ident("column") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("name") {
                        let lit: syn::LitStr = meta.value()?.parse()?;
                        column = Some(lit.value());
                        Ok(())
                    } else if meta.path.is_ident("skip") {
                        skip = true;
                        Ok(())
                    } else {
                        Err(meta.error("expected `name = \"...\"` or `skip`"))
                    }
                })?;
            }
        }

        Ok(Self {
            ident,
            ty,
            is_id,
            is_auto,
            column,
            skip,
        })
    }

    /// Database column name: explicit override or the underscore form of
    /// the field name.
    pub fn column_name(&self) -> String {
        self.column
            .clone()
            .unwrap_or_else(|| naming::to_underscore(&self.ident.to_string()))
    }

    /// Integer classification of the field type, for generated-key
    /// write-back. `None` for non-integer types.
    ///
    /// Returns `(optional, width)`.
    pub fn int_kind(&self) -> Option<(bool, IntKind)> {
        match option_inner(&self.ty) {
            Some(inner) => int_width(inner).map(|kind| (true, kind)),
            None => int_width(&self.ty).map(|kind| (false, kind)),
        }
    }
}

/// The `T` of `Option<T>`, if the type is an Option path.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

fn int_width(ty: &Type) -> Option<IntKind> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    match segment.ident.to_string().as_str() {
        "i16" => Some(IntKind::I16),
        "i32" => Some(IntKind::I32),
        "i64" => Some(IntKind::I64),
        _ => None,
    }
}
