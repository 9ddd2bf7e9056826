use crate::libs::storage::database::database::db_migration;
use crate::libs::storage::records::{CredentialRecord, MediaRecord};
use crate::libs::storage::storage_traits::{CredentialStore, MediaStore, StoreError, Transactional};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension, Transaction};

pub struct SqliteTransaction<'conn> {
    tx: Transaction<'conn>,
}

impl<'conn> SqliteTransaction<'conn> {
    pub fn new(
        conn: &'conn mut PooledConnection<SqliteConnectionManager>,
    ) -> Result<Self, StoreError> {
        let trans = conn.transaction()?;
        Ok(Self { tx: trans })
    }

    pub fn inner(&self) -> &Transaction<'conn> {
        &self.tx
    }
}

impl<'conn> Transactional for SqliteTransaction<'conn> {
    fn commit(self) -> Result<(), StoreError> {
        self.tx.commit().map_err(StoreError::from)
    }

    fn rollback(self) -> Result<(), StoreError> {
        self.tx.rollback().map_err(StoreError::from)
    }
}

#[derive(Debug)]
pub struct SqliteStore {
    conn_pool: Pool<SqliteConnectionManager>,
}

impl SqliteStore {
    /// Open (or create) the database at `db_path` and bring its schema up to date.
    pub fn open(db_path: &str) -> Result<Self, StoreError> {
        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::new(manager)?;
        let store = Self { conn_pool: pool };
        db_migration(&store)?;
        Ok(store)
    }

    pub fn new_connection(
        &self,
    ) -> Result<PooledConnection<SqliteConnectionManager>, StoreError> {
        Ok(self.conn_pool.get()?)
    }
}

impl<'conn> CredentialStore for SqliteTransaction<'conn> {
    fn store_credential(&mut self, record: &CredentialRecord) -> Result<(), StoreError> {
        if self.load_credential(&record.wallet_id)?.is_some() {
            return Err(StoreError::CredentialExists(record.wallet_id.clone()));
        }

        self.tx.execute(
            "INSERT INTO credentials (wallet_id, salt, verifier, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                record.wallet_id,
                record.salt,
                record.verifier,
                record.created_at
            ],
        )?;
        Ok(())
    }

    fn load_credential(&mut self, wallet_id: &str) -> Result<Option<CredentialRecord>, StoreError> {
        let record = self
            .tx
            .query_row(
                "SELECT wallet_id, salt, verifier, created_at FROM credentials WHERE wallet_id = ?1",
                params![wallet_id],
                |row| {
                    Ok(CredentialRecord {
                        wallet_id: row.get(0)?,
                        salt: row.get(1)?,
                        verifier: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }
}

impl<'conn> MediaStore for SqliteTransaction<'conn> {
    fn save_media(&mut self, record: &MediaRecord) -> Result<bool, StoreError> {
        let inserted = self.tx.execute(
            "INSERT OR IGNORE INTO media_blobs (uri, content_type, content, byte_len, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.uri,
                record.content_type,
                record.content,
                record.content.len() as i64,
                record.created_at
            ],
        )?;
        Ok(inserted == 1)
    }

    fn load_media(&mut self, uri: &str) -> Result<Option<MediaRecord>, StoreError> {
        let record = self
            .tx
            .query_row(
                "SELECT uri, content_type, content, created_at FROM media_blobs WHERE uri = ?1",
                params![uri],
                |row| {
                    Ok(MediaRecord::from_db(
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                    ))
                },
            )
            .optional()?;
        Ok(record)
    }
}
