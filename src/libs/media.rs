//! Media upload seam used by the avatar picker and the post composer.
//!
//! [`PlaceholderUploader`] keeps the stand-in URIs the screens were built
//! against. [`ContentAddressedUploader`] hashes the bytes with SHA-256 and
//! keeps one copy of each blob in the local store, so the same file always
//! yields the same URI.

use crate::libs::storage::database::storage_sqlite::SqliteStore;
use crate::libs::storage::lib_sqlite_impl;
use crate::libs::storage::records::MediaRecord;
use crate::libs::storage::storage_traits::StoreError;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

pub const CONTENT_URI_PREFIX: &str = "media://sha256/";

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),
    #[error("File is empty: {0}")]
    EmptyFile(String),
    #[error("Store Error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload_media(&self, file: &MediaFile) -> Result<String, UploadError>;
}

#[derive(Clone, Debug)]
pub struct PlaceholderUploader {
    uri: String,
}

impl PlaceholderUploader {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

#[async_trait]
impl MediaUploader for PlaceholderUploader {
    async fn upload_media(&self, file: &MediaFile) -> Result<String, UploadError> {
        debug!(file = %file.file_name, uri = %self.uri, "Skipping upload, using placeholder");
        Ok(self.uri.clone())
    }
}

pub fn content_uri(bytes: &[u8]) -> String {
    format!("{}{}", CONTENT_URI_PREFIX, hex::encode(Sha256::digest(bytes)))
}

#[derive(Clone, Debug)]
pub struct ContentAddressedUploader {
    store: Arc<SqliteStore>,
}

impl ContentAddressedUploader {
    pub fn new(store: Arc<SqliteStore>) -> Self {
        Self { store }
    }

    pub fn fetch(&self, uri: &str) -> Result<Option<MediaRecord>, UploadError> {
        Ok(lib_sqlite_impl::load_media(&self.store, uri)?)
    }
}

#[async_trait]
impl MediaUploader for ContentAddressedUploader {
    async fn upload_media(&self, file: &MediaFile) -> Result<String, UploadError> {
        if file.bytes.is_empty() {
            return Err(UploadError::EmptyFile(file.file_name.clone()));
        }

        let uri = content_uri(&file.bytes);
        let record = MediaRecord::new(uri.clone(), file.content_type.clone(), file.bytes.clone());
        let inserted = lib_sqlite_impl::save_media(&self.store, &record)?;

        info!(file = %file.file_name, %uri, bytes = file.bytes.len(), inserted, "Stored media");
        Ok(uri)
    }
}
