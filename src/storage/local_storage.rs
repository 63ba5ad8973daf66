// src/storage/local_storage.rs
//
// String key/value pairs that survive restarts. Multi-key writes go through a
// single transaction so readers never see half of an update.
use crate::storage::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

pub fn get_item(conn: &Connection, key: &str) -> Result<Option<String>, StorageError> {
    conn.query_row(
        "select value from local_storage where key = ?",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| StorageError::Db(format!("read {key} failed: {e}")))
}

pub fn set_items(conn: &mut Connection, items: &[(&str, &str)]) -> Result<(), StorageError> {
    let tx = conn.transaction()?;
    for (key, value) in items {
        tx.execute(
            r#"
            insert into local_storage (key, value) values (?, ?)
            on conflict(key) do update set value = excluded.value
            "#,
            params![key, value],
        )
        .map_err(|e| StorageError::Db(format!("write {key} failed: {e}")))?;
    }
    tx.commit()?;
    Ok(())
}

pub fn remove_items(conn: &mut Connection, keys: &[&str]) -> Result<(), StorageError> {
    let tx = conn.transaction()?;
    for key in keys {
        tx.execute("delete from local_storage where key = ?", params![key])
            .map_err(|e| StorageError::Db(format!("remove {key} failed: {e}")))?;
    }
    tx.commit()?;
    Ok(())
}
