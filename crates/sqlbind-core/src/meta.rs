// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The compile-time mapping table.
//!
//! `#[derive(Table)]` turns a struct definition into a `'static`
//! [`TableMeta`] plus typed accessors, built once at compile time and
//! validated during macro expansion. Nothing is discovered per call.
//!
//! # Layout
//!
//! | Item | Holds |
//! |------|-------|
//! | [`TableMeta`] | table name, identifier, declared columns in order |
//! | [`IdMeta`] | identifier column, field name, auto-generated flag |
//! | [`ColumnMeta`] | column name and the field it maps |
//!
//! # Manual Implementations
//!
//! The [`Table`] trait can be implemented by hand for types the derive
//! cannot express; the SQL builders only ever go through the trait.

use crate::value::SqlValue;

/// Metadata for one mapped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Database column name.
    pub name: &'static str,

    /// Struct field backing the column.
    pub field: &'static str,
}

/// Metadata for the identifier column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdMeta {
    /// Database column name of the primary key.
    pub column: &'static str,

    /// Struct field backing the primary key.
    pub field: &'static str,

    /// Whether the database generates the key on insert.
    pub auto: bool,
}

/// Complete mapping table for one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableMeta {
    /// Database table name.
    pub table: &'static str,

    /// The identifier column. Exactly one per mapped type.
    pub id: IdMeta,

    /// Declared non-identifier columns, in declaration order.
    pub columns: &'static [ColumnMeta],
}

impl TableMeta {
    /// Look up a declared column by name.
    pub fn column(&self, name: &str) -> Option<&'static ColumnMeta> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// A type with a compile-time mapping table.
///
/// Implemented by `#[derive(Table)]`. The derive guarantees the invariants
/// the SQL builders rely on: exactly one identifier, and
/// [`values`](Table::values) aligned with `meta().columns`.
pub trait Table {
    /// The mapping table for this type.
    fn meta() -> &'static TableMeta
    where
        Self: Sized;

    /// Current value of the identifier field.
    fn id_value(&self) -> SqlValue;

    /// Values of the non-identifier columns, in declaration order.
    fn values(&self) -> Vec<SqlValue>;

    /// Value of one declared column by name, `None` if unmapped.
    fn column_value(&self, column: &str) -> Option<SqlValue>;

    /// Write a database-generated key back into the identifier field.
    ///
    /// The derive overrides this for auto-generated integer identifiers;
    /// for everything else the default is a no-op.
    fn set_generated_key(&mut self, key: i64) {
        let _ = key;
    }
}
