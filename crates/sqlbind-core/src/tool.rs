// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The user-facing facade.
//!
//! [`SqlTool`] composes the SQL builders with the template proxy to give
//! CRUD shortcuts over mapped types plus typed queries over hand-written
//! SQL.
//!
//! # Operations
//!
//! | Method | SQL source | Notes |
//! |--------|-----------|-------|
//! | [`list`](SqlTool::list) / [`get`](SqlTool::get) | caller | row-mapped via `sqlx::FromRow` |
//! | [`get_by_id`](SqlTool::get_by_id) | generated | `SELECT * ... WHERE id = $1` |
//! | [`count`](SqlTool::count) | caller | single-row single-column numeric |
//! | [`save`](SqlTool::save) | generated | writes a generated key back |
//! | [`update`](SqlTool::update) / [`merge`](SqlTool::merge) / [`delete`](SqlTool::delete) | generated | |
//! | [`batch_update`](SqlTool::batch_update) | caller | pass-through batch |
//!
//! # Counting
//!
//! `count` returns `Result<i64>`: an empty result is `Ok(0)`, a failing
//! query is an error. Callers can always tell "zero rows" from "the query
//! failed".
//!
//! # Example
//!
//! ```rust,ignore
//! use sqlbind_core::{params, SqlTool};
//!
//! let tool = SqlTool::with_catalog(pool, "shardA");
//! let mut order = PurOrder { pur_order_id: None, order_no: "PO-1".into() };
//! tool.save(&mut order).await?;
//! let found: Option<PurOrder> = tool.get_by_id(order.pur_order_id).await?;
//! let open = tool
//!     .count("SELECT count(*) FROM ${catalog}.pur_order WHERE state = $1", &params!["open"])
//!     .await?;
//! ```

use sqlx::{postgres::PgRow, PgPool};

use crate::{
    error::Result,
    meta::Table,
    proxy::TemplateProxy,
    sql,
    value::SqlValue,
};

/// CRUD facade over a mapped type set and a Postgres pool.
///
/// The proxy is created once at construction and reused for every call.
#[derive(Debug, Clone)]
pub struct SqlTool {
    proxy: TemplateProxy,
}

impl SqlTool {
    /// Create a tool without a configured catalog.
    pub fn new(pool: PgPool) -> Self {
        Self {
            proxy: TemplateProxy::new(pool),
        }
    }

    /// Create a tool with an active catalog name.
    pub fn with_catalog(pool: PgPool, catalog: impl Into<String>) -> Self {
        Self {
            proxy: TemplateProxy::with_catalog(pool, catalog),
        }
    }

    /// Change the active catalog name.
    pub fn set_catalog(&mut self, catalog: impl Into<String>) {
        self.proxy.set_catalog(catalog);
    }

    /// The wrapped pool, for custom statements and transactions.
    pub fn pool(&self) -> &PgPool {
        self.proxy.pool()
    }

    /// Fetch a typed row list for arbitrary SQL.
    pub async fn list<T>(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<T>>
    where
        T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        self.proxy.query(sql, params).await
    }

    /// Fetch the first row of a query, `None` when the result is empty.
    ///
    /// At most one row is materialized, however many the query matches.
    pub async fn get<T>(&self, sql: &str, params: &[SqlValue]) -> Result<Option<T>>
    where
        T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        self.proxy.query_first(sql, params).await
    }

    /// Fetch one mapped object by identifier, `None` when absent.
    pub async fn get_by_id<T>(&self, id: impl Into<SqlValue>) -> Result<Option<T>>
    where
        T: Table + for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        let pair = sql::get_by_id::<T>(id.into());
        self.get(&pair.sql, &pair.params).await
    }

    /// Run a count query expected to yield one numeric column.
    ///
    /// An empty result maps to `Ok(0)`; execution failures propagate.
    pub async fn count(&self, sql: &str, params: &[SqlValue]) -> Result<i64> {
        Ok(self.proxy.query_scalar(sql, params).await?.unwrap_or(0))
    }

    /// Insert a mapped object.
    ///
    /// With an auto-generated identifier the insert runs with
    /// `RETURNING <id>` and the key is written back into the object.
    pub async fn save<T: Table>(&self, po: &mut T) -> Result<()> {
        if T::meta().id.auto {
            let pair = sql::insert_returning(po);
            let key = self.proxy.insert_returning_key(&pair.sql, &pair.params).await?;
            po.set_generated_key(key);
        } else {
            let pair = sql::insert(po);
            self.proxy.update(&pair.sql, &pair.params).await?;
        }
        Ok(())
    }

    /// Update every declared column of a mapped object by identifier.
    pub async fn update<T: Table>(&self, po: &T) -> Result<u64> {
        let pair = sql::update(po);
        self.proxy.update(&pair.sql, &pair.params).await
    }

    /// Update an explicit column subset of a mapped object by identifier.
    ///
    /// An empty subset is a no-op: no SQL is executed and 0 is returned.
    pub async fn merge<T: Table>(&self, po: &T, columns: &[&str]) -> Result<u64> {
        if columns.is_empty() {
            return Ok(0);
        }
        let pair = sql::merge(po, columns)?;
        self.proxy.update(&pair.sql, &pair.params).await
    }

    /// Delete a mapped object by identifier.
    pub async fn delete<T: Table>(&self, po: &T) -> Result<u64> {
        let pair = sql::delete(po);
        self.proxy.update(&pair.sql, &pair.params).await
    }

    /// Apply one statement over many parameter rows, in order.
    pub async fn batch_update(&self, sql: &str, param_rows: &[Vec<SqlValue>]) -> Result<Vec<u64>> {
        self.proxy.batch_update(sql, param_rows).await
    }
}
