// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # sqlbind
//!
//! Derive SQL statements and parameter bindings from plain structs, and
//! run them through a catalog-aware pool template.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sqlbind::{params, SqlTool, Table};
//!
//! #[derive(Table, Debug, Clone)]
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
//!
//! let tool = SqlTool::with_catalog(pool, "shardA");
//!
//! let mut po = PurOrder { pur_order_id: None, order_no: "PO-1".into(), customer: None };
//! tool.save(&mut po).await?;          // INSERT ... RETURNING pur_order_id
//! assert!(po.pur_order_id.is_some()); // generated key written back
//!
//! tool.merge(&po, &["cust_name"]).await?;
//!
//! let open = tool
//!     .count("SELECT count(*) FROM ${catalog}.pur_order WHERE state = $1", &params!["open"])
//!     .await?;
//! ```
//!
//! The mapping is built once at compile time by `#[derive(Table)]`; the
//! runtime pieces live in `sqlbind-core` and are re-exported here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use sqlbind_core::*;
pub use sqlbind_core::params;
pub use sqlbind_derive_impl::Table;
