use crate::libs::storage::database::storage_sqlite::SqliteStore;
use crate::libs::storage::lib_sqlite_impl;
use crate::libs::storage::records::CredentialRecord;
use crate::libs::storage::storage_traits::StoreError;
use async_trait::async_trait;
use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

type HmacSha256 = Hmac<Sha256>;

const SALT_LEN: usize = 16;
const KEY_SECRET_LEN: usize = 32;
const HKDF_INFO_CREDENTIAL_KEY: &[u8] = b"SOCIALFI_CREDENTIAL_KEY";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Please enter a valid Wallet ID to log in")]
    MissingWalletId,
    #[error("Invalid wallet ID or password")]
    InvalidCredentials,
    #[error("Wallet ID already registered: {0}")]
    AlreadyRegistered(String),
    #[error("Crypto Error: {0}")]
    Crypto(String),
    #[error("Store Error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CredentialExists(wallet_id) => AuthError::AlreadyRegistered(wallet_id),
            other => AuthError::Store(other),
        }
    }
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn verify(&self, wallet_id: &str, password: &str) -> Result<(), AuthError>;
}

/// Accepts any credentials. Stands in for the login form until wallets
/// are registered with a [`CredentialAuthenticator`].
#[derive(Debug, Default)]
pub struct SimulatedAuthenticator;

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn verify(&self, wallet_id: &str, _password: &str) -> Result<(), AuthError> {
        warn!(%wallet_id, "Simulated login, credentials were not checked");
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct CredentialAuthenticator {
    store: Arc<SqliteStore>,
}

impl CredentialAuthenticator {
    pub fn new(store: Arc<SqliteStore>) -> Self {
        Self { store }
    }

    pub fn register(&self, wallet_id: &str, password: &str) -> Result<(), AuthError> {
        if wallet_id.is_empty() {
            return Err(AuthError::MissingWalletId);
        }

        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill(&mut salt);

        let verifier = derive_verifier(&salt, wallet_id, password)?;
        let record = CredentialRecord::new(wallet_id.to_string(), salt.to_vec(), verifier);
        lib_sqlite_impl::store_credential(&self.store, &record)?;

        info!(%wallet_id, "Registered credential");
        Ok(())
    }
}

#[async_trait]
impl Authenticator for CredentialAuthenticator {
    async fn verify(&self, wallet_id: &str, password: &str) -> Result<(), AuthError> {
        let record = lib_sqlite_impl::load_credential(&self.store, wallet_id)?
            .ok_or(AuthError::InvalidCredentials)?;

        credential_mac(&record.salt, wallet_id, password)?
            .verify_slice(&record.verifier)
            .map_err(|_| {
                warn!(%wallet_id, "Password did not match");
                AuthError::InvalidCredentials
            })
    }
}

// HMAC keyed with HKDF(salt, password) over the wallet id
fn credential_mac(salt: &[u8], wallet_id: &str, password: &str) -> Result<HmacSha256, AuthError> {
    let hkdf = Hkdf::<Sha256>::new(Some(salt), password.as_bytes());
    let mut key = [0u8; KEY_SECRET_LEN];
    hkdf.expand(HKDF_INFO_CREDENTIAL_KEY, &mut key)
        .map_err(|e| AuthError::Crypto(e.to_string()))?;

    let mut mac = <HmacSha256 as Mac>::new_from_slice(&key)
        .map_err(|e| AuthError::Crypto(e.to_string()))?;
    mac.update(wallet_id.as_bytes());
    Ok(mac)
}

fn derive_verifier(salt: &[u8], wallet_id: &str, password: &str) -> Result<Vec<u8>, AuthError> {
    Ok(credential_mac(salt, wallet_id, password)?
        .finalize()
        .into_bytes()
        .to_vec())
}
