use crate::libs::storage::records::{CredentialRecord, MediaRecord};
use thiserror::Error;

pub trait Transactional {
    fn commit(self) -> Result<(), StoreError>;
    fn rollback(self) -> Result<(), StoreError>;
}

pub trait CredentialStore {
    fn store_credential(&mut self, record: &CredentialRecord) -> Result<(), StoreError>;
    fn load_credential(&mut self, wallet_id: &str) -> Result<Option<CredentialRecord>, StoreError>;
}

pub trait MediaStore {
    /// Returns `false` when a blob with the same URI was already stored.
    fn save_media(&mut self, record: &MediaRecord) -> Result<bool, StoreError>;
    fn load_media(&mut self, uri: &str) -> Result<Option<MediaRecord>, StoreError>;
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Sqlite Error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("ConnectionPool Error: {0}")]
    ConnectionPool(#[from] r2d2::Error),
    #[error("Migration Error: {0}")]
    Migration(String),
    #[error("Credential Already Exists: {0}")]
    CredentialExists(String),
}
