use crate::libs::storage::database::storage_sqlite::{SqliteStore, SqliteTransaction};
use crate::libs::storage::records::{CredentialRecord, MediaRecord};
use crate::libs::storage::storage_traits::{CredentialStore, MediaStore, StoreError, Transactional};
use tracing::warn;

fn with_transaction<T>(
    store: &SqliteStore,
    op: impl FnOnce(&mut SqliteTransaction<'_>) -> Result<T, StoreError>,
) -> Result<T, StoreError> {
    let mut connection = store.new_connection()?;
    let mut sqlite_transaction = SqliteTransaction::new(&mut connection)?;

    match op(&mut sqlite_transaction) {
        Ok(value) => {
            sqlite_transaction.commit()?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = sqlite_transaction.rollback() {
                warn!("Rollback failed after {err}: {rollback_err}");
            }
            Err(err)
        }
    }
}

pub fn store_credential(store: &SqliteStore, record: &CredentialRecord) -> Result<(), StoreError> {
    with_transaction(store, |tx| tx.store_credential(record))
}

pub fn load_credential(
    store: &SqliteStore,
    wallet_id: &str,
) -> Result<Option<CredentialRecord>, StoreError> {
    with_transaction(store, |tx| tx.load_credential(wallet_id))
}

pub fn save_media(store: &SqliteStore, record: &MediaRecord) -> Result<bool, StoreError> {
    with_transaction(store, |tx| tx.save_media(record))
}

pub fn load_media(store: &SqliteStore, uri: &str) -> Result<Option<MediaRecord>, StoreError> {
    with_transaction(store, |tx| tx.load_media(uri))
}
