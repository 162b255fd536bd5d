// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime for sqlbind.
//!
//! This crate holds everything that executes: the naming convention, the
//! dynamic value model, the compile-time mapping table traits, the SQL
//! builders, the catalog-substituting execution proxy and the [`SqlTool`]
//! facade. The `#[derive(Table)]` macro lives in `sqlbind-derive-impl`;
//! most users depend on the `sqlbind` facade crate which re-exports both.
//!
//! # Overview
//!
//! - [`naming`] camelCase / underscore_case translation
//! - [`SqlValue`] dynamically typed parameters, plus [`params!`]
//! - [`Table`] / [`TableMeta`] the per-type mapping table
//! - [`sql`] statement builders emitting [`SqlParams`] pairs
//! - [`TemplateProxy`] catalog substitution and failure logging
//! - [`SqlTool`] list / get / count / save / update / merge / delete
//!
//! Manual [`Table`] implementations are supported; the derive is the
//! convenient path, not the only one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod meta;
pub mod naming;
pub mod proxy;
pub mod sql;
pub mod tool;
mod value;

pub use catalog::CATALOG_PLACEHOLDER;
pub use error::{Error, Result};
pub use meta::{ColumnMeta, IdMeta, Table, TableMeta};
pub use proxy::TemplateProxy;
pub use sql::SqlParams;
pub use tool::SqlTool;
pub use value::SqlValue;

/// Re-export sqlx for generated code and row-mapped queries.
pub use sqlx;
