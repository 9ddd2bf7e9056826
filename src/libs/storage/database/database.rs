use crate::libs::storage::database::storage_sqlite::{SqliteStore, SqliteTransaction};
use crate::libs::storage::storage_traits::{StoreError, Transactional};
use tracing::info;

pub(crate) fn db_migration(store: &SqliteStore) -> Result<(), StoreError> {
    let mut connection = store.new_connection()?;
    let sqlite_transaction = SqliteTransaction::new(&mut connection)?;

    // password verifiers for the wallet-id login form
    sqlite_transaction
        .inner()
        .execute(
            "CREATE TABLE IF NOT EXISTS credentials (
                wallet_id TEXT PRIMARY KEY,
                salt BLOB NOT NULL,
                verifier BLOB NOT NULL,
                created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
            );",
            [],
        )
        .map_err(|e| StoreError::Migration(e.to_string()))?;

    // content-addressed uploads, keyed by their media:// uri
    sqlite_transaction
        .inner()
        .execute_batch(
            r#"CREATE TABLE IF NOT EXISTS media_blobs (
                uri TEXT PRIMARY KEY,
                content_type TEXT NOT NULL,
                content BLOB NOT NULL,
                byte_len INTEGER NOT NULL,
                created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now')),

                CHECK (byte_len > 0)
            );
        "#,
        )
        .map_err(|e| StoreError::Migration(e.to_string()))?;

    sqlite_transaction
        .commit()
        .map_err(|e| StoreError::Migration(format!("Could not commit initial db: {e}")))?;

    info!("Client database initialized and ready to use");
    Ok(())
}
