// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use sqlbind::{sql, Table};

/// Auto-generated identifier with a renamed column.
#[derive(Table, Debug, Clone)]
#[table(name = "pur_order")]
pub struct PurOrder {
    #[id]
    #[auto]
    pub pur_order_id: Option<i64>,

    pub order_no: String,

    #[column(name = "cust_name")]
    pub customer: Option<String>,
}

fn main() {
    let po = PurOrder {
        pur_order_id: None,
        order_no: "PO-1".to_string(),
        customer: None,
    };
    let pair = sql::insert(&po);
    assert_eq!(
        pair.sql,
        "INSERT INTO pur_order (order_no, cust_name) VALUES ($1, $2)"
    );
}
