// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Catalog placeholder substitution.
//!
//! Hand-written SQL may reference `${catalog}` where a schema or catalog
//! name belongs, e.g. `SELECT * FROM ${catalog}.pur_order`. The template
//! proxy substitutes the active catalog name before execution. The catalog
//! is scoped to the proxy that carries it, not process-global state.

/// The placeholder token recognized in hand-written SQL.
pub const CATALOG_PLACEHOLDER: &str = "${catalog}";

/// Replace every placeholder occurrence with `catalog`.
///
/// Nothing else in the text is altered. With no configured catalog or no
/// placeholder present, the input is returned as-is.
pub fn substitute(sql: &str, catalog: Option<&str>) -> String {
    match catalog {
        Some(name) if sql.contains(CATALOG_PLACEHOLDER) => {
            sql.replace(CATALOG_PLACEHOLDER, name)
        }
        _ => sql.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let sql = "SELECT * FROM ${catalog}.a JOIN ${catalog}.b ON a.id = b.id";
        assert_eq!(
            substitute(sql, Some("shardA")),
            "SELECT * FROM shardA.a JOIN shardA.b ON a.id = b.id"
        );
    }

    #[test]
    fn alters_nothing_else() {
        let sql = "SELECT 'literal ${not_catalog}' FROM ${catalog}.t WHERE x = $1";
        assert_eq!(
            substitute(sql, Some("shardA")),
            "SELECT 'literal ${not_catalog}' FROM shardA.t WHERE x = $1"
        );
    }

    #[test]
    fn no_catalog_leaves_text_untouched() {
        let sql = "SELECT * FROM ${catalog}.t";
        assert_eq!(substitute(sql, None), sql);
    }

    #[test]
    fn no_placeholder_is_a_passthrough() {
        let sql = "SELECT 1";
        assert_eq!(substitute(sql, Some("shardA")), sql);
    }
}
