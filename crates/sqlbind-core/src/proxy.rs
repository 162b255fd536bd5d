// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Execution proxy around `sqlx::PgPool`.
//!
//! Every statement goes through [`TemplateProxy`] instead of the pool
//! directly, for two reasons:
//!
//! - the catalog placeholder in hand-written SQL is rewritten to the
//!   active catalog name before execution
//! - a failing statement is logged with its rewritten text and every
//!   parameter rendered in bind order, then the original error is
//!   re-signaled unchanged
//!
//! There is no retry and no suppression. One statement per call, awaited
//! to completion.

use sqlx::{postgres::PgRow, PgPool};
use tracing::{debug, error};

use crate::{
    catalog,
    error::{Error, Result},
    value::{bind_value, render_params, SqlValue},
};

/// Pool wrapper with catalog substitution and failure logging.
#[derive(Debug, Clone)]
pub struct TemplateProxy {
    pool: PgPool,
    catalog: Option<String>,
}

impl TemplateProxy {
    /// Wrap a pool without a configured catalog.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            catalog: None,
        }
    }

    /// Wrap a pool with an active catalog name.
    pub fn with_catalog(pool: PgPool, catalog: impl Into<String>) -> Self {
        Self {
            pool,
            catalog: Some(catalog.into()),
        }
    }

    /// Change the active catalog name.
    pub fn set_catalog(&mut self, catalog: impl Into<String>) {
        self.catalog = Some(catalog.into());
    }

    /// The wrapped pool, for custom statements and transactions.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn rewrite(&self, sql: &str) -> String {
        catalog::substitute(sql, self.catalog.as_deref())
    }

    fn log_failure(sql: &str, params: &[SqlValue], err: &sqlx::Error) {
        error!(
            sql = %sql,
            params = %render_params(params),
            error = %err,
            "statement failed"
        );
    }

    /// Run a row-mapped query.
    pub async fn query<T>(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<T>>
    where
        T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = self.rewrite(sql);
        debug!(sql = %sql, bind_count = params.len(), "executing query");

        let mut query = sqlx::query_as::<_, T>(&sql);
        for param in params {
            query = bind_value!(query, param);
        }
        match query.fetch_all(&self.pool).await {
            Ok(rows) => Ok(rows),
            Err(err) => {
                Self::log_failure(&sql, params, &err);
                Err(err.into())
            }
        }
    }

    /// Run a row-mapped query, materializing at most the first row.
    pub async fn query_first<T>(&self, sql: &str, params: &[SqlValue]) -> Result<Option<T>>
    where
        T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = self.rewrite(sql);
        debug!(sql = %sql, bind_count = params.len(), "executing first-row query");

        let mut query = sqlx::query_as::<_, T>(&sql);
        for param in params {
            query = bind_value!(query, param);
        }
        match query.fetch_optional(&self.pool).await {
            Ok(row) => Ok(row),
            Err(err) => {
                Self::log_failure(&sql, params, &err);
                Err(err.into())
            }
        }
    }

    /// Run a query expected to produce at most one numeric scalar.
    pub async fn query_scalar(&self, sql: &str, params: &[SqlValue]) -> Result<Option<i64>> {
        let sql = self.rewrite(sql);
        debug!(sql = %sql, bind_count = params.len(), "executing scalar query");

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for param in params {
            query = bind_value!(query, param);
        }
        match query.fetch_optional(&self.pool).await {
            Ok(value) => Ok(value),
            Err(err) => {
                Self::log_failure(&sql, params, &err);
                Err(err.into())
            }
        }
    }

    /// Run one DML statement, returning the affected row count.
    pub async fn update(&self, sql: &str, params: &[SqlValue]) -> Result<u64> {
        let sql = self.rewrite(sql);
        debug!(sql = %sql, bind_count = params.len(), "executing update");

        let mut query = sqlx::query(&sql);
        for param in params {
            query = bind_value!(query, param);
        }
        match query.execute(&self.pool).await {
            Ok(result) => Ok(result.rows_affected()),
            Err(err) => {
                Self::log_failure(&sql, params, &err);
                Err(err.into())
            }
        }
    }

    /// Apply one statement over many parameter rows, in order.
    ///
    /// A pass-through batch: with no parameter rows the statement runs
    /// once. The first failure aborts the remainder.
    pub async fn batch_update(&self, sql: &str, param_rows: &[Vec<SqlValue>]) -> Result<Vec<u64>> {
        if param_rows.is_empty() {
            return Ok(vec![self.update(sql, &[]).await?]);
        }
        let mut affected = Vec::with_capacity(param_rows.len());
        for params in param_rows {
            affected.push(self.update(sql, params).await?);
        }
        Ok(affected)
    }

    /// Execute an `INSERT ... RETURNING <id>` and read the generated key.
    ///
    /// # Errors
    ///
    /// [`Error::NoGeneratedKey`] when the statement returned no row.
    pub async fn insert_returning_key(&self, sql: &str, params: &[SqlValue]) -> Result<i64> {
        self.query_scalar(sql, params)
            .await?
            .ok_or(Error::NoGeneratedKey)
    }
}
