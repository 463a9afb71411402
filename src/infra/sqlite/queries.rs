use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::infra::sqlite::schema::open_connection;

pub fn read_value(db_path: &Path, key: &str) -> Result<Option<String>> {
    let conn = open_connection(db_path)?;
    conn.query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
        row.get::<_, String>(0)
    })
    .optional()
    .with_context(|| format!("failed to read value for key {key}"))
}

pub fn upsert_value(db_path: &Path, key: &str, value: &str) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute(
        "INSERT INTO kv(key, value, updated_at)
         VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value],
    )
    .with_context(|| format!("failed to upsert value for key {key}"))?;
    Ok(())
}

pub fn delete_value(db_path: &Path, key: &str) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute("DELETE FROM kv WHERE key = ?1", params![key])
        .with_context(|| format!("failed to delete value for key {key}"))?;
    Ok(())
}
