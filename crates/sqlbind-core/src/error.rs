// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type for sqlbind operations.
//!
//! Mapping mistakes in the struct definition (missing identifier, bad
//! attributes) are compile errors reported by the derive. What remains at
//! runtime:
//!
//! - merge called with a column name the type does not map
//! - merge called with no columns at all
//! - an insert that should have produced a generated key but did not
//! - any failure from the underlying database call, passed through

/// Result alias for sqlbind operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by sqlbind.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-supplied column name is not in the mapping table.
    #[error("table `{table}` has no mapped column `{column}`")]
    ColumnNotFound {
        /// Table whose mapping was consulted.
        table: &'static str,
        /// The unmapped column name.
        column: String,
    },

    /// Merge was asked to update an empty column subset.
    #[error("merge requires at least one column")]
    EmptyMerge,

    /// An insert expected to return a generated key returned none.
    #[error("insert returned no generated key")]
    NoGeneratedKey,

    /// Failure from the underlying database call, re-signaled unchanged.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
