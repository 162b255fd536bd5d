// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use sqlbind::{sql, SqlValue, Table};

/// Application-assigned UUID identifier, timestamp column.
#[derive(Table, Debug, Clone)]
pub struct Session {
    #[id]
    pub session_id: uuid::Uuid,

    pub login: String,

    pub started_at: chrono::DateTime<chrono::Utc>,
}

fn main() {
    let session = Session {
        session_id: uuid::Uuid::nil(),
        login: "alex".to_string(),
        started_at: chrono::DateTime::UNIX_EPOCH,
    };
    let pair = sql::delete(&session);
    assert_eq!(pair.sql, "DELETE FROM session WHERE session_id = $1");
    assert_eq!(pair.params, vec![SqlValue::Uuid(Some(uuid::Uuid::nil()))]);
}
