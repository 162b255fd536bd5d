// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL statement builders.
//!
//! Each builder reads a type's mapping table and emits a [`SqlParams`]
//! pair: statement text with `$1..$n` placeholders plus the bound values
//! in exactly that order.
//!
//! # Statement Shapes
//!
//! | Builder | Statement |
//! |---------|-----------|
//! | [`insert`] | `INSERT INTO t (c1, c2) VALUES ($1, $2)` |
//! | [`insert_returning`] | `INSERT INTO t (c1, c2) VALUES ($1, $2) RETURNING id::bigint` |
//! | [`update`] | `UPDATE t SET c1 = $1, c2 = $2 WHERE id = $3` |
//! | [`merge`] | `UPDATE t SET c2 = $1 WHERE id = $2` |
//! | [`delete`] | `DELETE FROM t WHERE id = $1` |
//! | [`get_by_id`] | `SELECT * FROM t WHERE id = $1` |
//!
//! # Null Policy
//!
//! Null-valued columns are included in generated INSERTs and bound as
//! typed `NULL` parameters. Only an auto-generated identifier is omitted,
//! leaving key assignment to the database.

use crate::{
    error::{Error, Result},
    meta::Table,
    value::SqlValue,
};

/// A generated statement and its bound values.
///
/// Values align positionally with the `$n` placeholders in the text.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlParams {
    /// Statement text with `$1..$n` placeholders.
    pub sql: String,

    /// Bound values in placeholder order.
    pub params: Vec<SqlValue>,
}

/// Build `$start..$start+count-1` placeholders, comma separated.
fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build a SET clause: `c1 = $start, c2 = $start+1, ...`
fn set_clause(columns: &[&str], start: usize) -> String {
    columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", c, start + i))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build an INSERT for a mapped object.
///
/// Columns are the identifier (only when not auto-generated) followed by
/// the declared columns in order. Null values are bound as `NULL`.
pub fn insert<T: Table>(po: &T) -> SqlParams {
    let meta = T::meta();

    let mut columns: Vec<&str> = Vec::with_capacity(meta.columns.len() + 1);
    let mut params: Vec<SqlValue> = Vec::with_capacity(meta.columns.len() + 1);
    if !meta.id.auto {
        columns.push(meta.id.column);
        params.push(po.id_value());
    }
    columns.extend(meta.columns.iter().map(|c| c.name));
    params.extend(po.values());

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        meta.table,
        columns.join(", "),
        placeholders(1, columns.len())
    );
    SqlParams { sql, params }
}

/// Build an INSERT that returns the generated identifier.
///
/// The key column is cast to `bigint` so `smallserial`, `serial` and
/// `bigserial` identifiers all decode through the same scalar read.
pub fn insert_returning<T: Table>(po: &T) -> SqlParams {
    let meta = T::meta();
    let mut pair = insert(po);
    pair.sql.push_str(" RETURNING ");
    pair.sql.push_str(meta.id.column);
    pair.sql.push_str("::bigint");
    pair
}

/// Build an UPDATE-by-id covering every declared column.
///
/// Parameters are the non-identifier values in declaration order, then the
/// identifier value.
pub fn update<T: Table>(po: &T) -> SqlParams {
    let meta = T::meta();
    let columns: Vec<&str> = meta.columns.iter().map(|c| c.name).collect();

    let sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        meta.table,
        set_clause(&columns, 1),
        meta.id.column,
        columns.len() + 1
    );
    let mut params = po.values();
    params.push(po.id_value());
    SqlParams { sql, params }
}

/// Build an UPDATE-by-id restricted to an explicit column subset.
///
/// # Errors
///
/// [`Error::EmptyMerge`] when `columns` is empty, [`Error::ColumnNotFound`]
/// when a name is not in the mapping table.
pub fn merge<T: Table>(po: &T, columns: &[&str]) -> Result<SqlParams> {
    if columns.is_empty() {
        return Err(Error::EmptyMerge);
    }
    let meta = T::meta();

    let mut params: Vec<SqlValue> = Vec::with_capacity(columns.len() + 1);
    for column in columns {
        match po.column_value(column) {
            Some(value) => params.push(value),
            None => {
                return Err(Error::ColumnNotFound {
                    table: meta.table,
                    column: (*column).to_string(),
                });
            }
        }
    }
    params.push(po.id_value());

    let sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        meta.table,
        set_clause(columns, 1),
        meta.id.column,
        columns.len() + 1
    );
    Ok(SqlParams { sql, params })
}

/// Build a DELETE-by-id for a mapped object.
pub fn delete<T: Table>(po: &T) -> SqlParams {
    let meta = T::meta();
    let sql = format!("DELETE FROM {} WHERE {} = $1", meta.table, meta.id.column);
    SqlParams {
        sql,
        params: vec![po.id_value()],
    }
}

/// Build a SELECT-by-id for a mapped type.
pub fn get_by_id<T: Table>(id: SqlValue) -> SqlParams {
    let meta = T::meta();
    let sql = format!("SELECT * FROM {} WHERE {} = $1", meta.table, meta.id.column);
    SqlParams {
        sql,
        params: vec![id],
    }
}
