//! Client-side core for the SocialFi profile and feed screens.
//!
//! Controllers keep the form state and talk to the contract through a
//! [`ContractGateway`]; front-ends render the view models in
//! [`libs::ffi::models`].

pub mod libs;

use crate::libs::auth::AuthError;
use crate::libs::core::config::ClientConfig;
use crate::libs::core::validation::ValidationError;
use crate::libs::gateway::GatewayError;
use crate::libs::media::UploadError;
use crate::libs::storage::database::storage_sqlite::SqliteStore;
use crate::libs::storage::storage_traits::StoreError;
use std::sync::Arc;
use thiserror::Error;

pub use crate::libs::core::models::{
    Identity, Notification, NotificationLevel, PostDraft, ProfileForm, ProfileRecord,
};
pub use crate::libs::feed_composer::FeedComposer;
pub use crate::libs::gateway::{ContractCall, ContractGateway, SubmitOutcome, TxReceipt};
pub use crate::libs::profile_editor::{EditorPhase, ProfileEditor};
pub use crate::libs::session::{LoginForm, Session};

uniffi::setup_scaffolding!();

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("No wallet connected")]
    NotConnected,
    #[error("No profile to edit")]
    NoProfileToEdit,
    #[error("A write is already in flight")]
    WriteInFlight,
    #[error("Profile state is unknown until it has been read")]
    ProfileUnavailable,
    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Gateway Error: {0}")]
    Gateway(#[from] GatewayError),
    #[error("Upload Error: {0}")]
    Upload(#[from] UploadError),
    #[error("Auth Error: {0}")]
    Auth(#[from] AuthError),
    #[error("Store Error: {0}")]
    Store(#[from] StoreError),
}

/// Open the local credential and media store named by `config`.
pub fn open_client_store(config: &ClientConfig) -> Result<Arc<SqliteStore>, ClientError> {
    Ok(Arc::new(SqliteStore::open(&config.database_path)?))
}
