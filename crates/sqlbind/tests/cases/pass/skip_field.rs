// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use sqlbind::{sql, Table};

/// A field held in memory only, excluded from the mapping.
#[derive(Table, Debug, Clone)]
pub struct Account {
    #[id]
    #[auto]
    pub account_id: i64,

    pub login: String,

    #[column(skip)]
    pub cached_rank: i32,
}

fn main() {
    let mut account = Account {
        account_id: 0,
        login: "alex".to_string(),
        cached_rank: 7,
    };
    let pair = sql::insert(&account);
    assert_eq!(pair.sql, "INSERT INTO account (login) VALUES ($1)");

    account.set_generated_key(41);
    assert_eq!(account.account_id, 41);
}
