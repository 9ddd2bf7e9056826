#![allow(dead_code)]

use async_trait::async_trait;
use socialfi_client_lib::libs::auth::SimulatedAuthenticator;
use socialfi_client_lib::libs::core::config::ClientConfig;
use socialfi_client_lib::libs::gateway::GatewayError;
use socialfi_client_lib::libs::media::{MediaFile, MediaUploader, PlaceholderUploader, UploadError};
use socialfi_client_lib::libs::notification::NotificationLog;
use socialfi_client_lib::libs::storage::database::storage_sqlite::SqliteStore;
use socialfi_client_lib::{
    ContractCall, ContractGateway, FeedComposer, Identity, LoginForm, ProfileEditor,
    ProfileRecord, Session, TxReceipt,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub const ALICE: &str = "0x1111111111111111111111111111111111111111";
pub const BOB: &str = "0x2222222222222222222222222222222222222222";

pub fn identity(address: &str) -> Identity {
    Identity::parse(address).expect("test address should parse")
}

pub async fn logged_in_session(address: &str) -> Session {
    let mut session = Session::new(Some(identity(address)));
    session
        .log_in(&LoginForm::default(), &SimulatedAuthenticator)
        .await
        .expect("connected wallet should log in");
    session
}

pub fn created_profile(username: &str, bio: &str, avatar_uri: &str) -> ProfileRecord {
    ProfileRecord {
        username: username.to_string(),
        bio: bio.to_string(),
        avatar_uri: avatar_uri.to_string(),
        is_created: true,
        post_count: 2,
        follower_count: 5,
    }
}

pub fn image(name: &str, bytes: &[u8]) -> MediaFile {
    MediaFile::new(name, "image/png", bytes.to_vec())
}

// Stands in for the contract: records every write and applies it to a
// single profile so follow-up reads see the result.
#[derive(Default)]
pub struct RecordingGateway {
    profile: Mutex<Option<ProfileRecord>>,
    calls: Mutex<Vec<(Identity, ContractCall)>>,
    reads: AtomicUsize,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl RecordingGateway {
    pub fn with_profile(profile: Option<ProfileRecord>) -> Arc<Self> {
        Arc::new(Self {
            profile: Mutex::new(profile),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<ContractCall> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, call)| call.clone())
            .collect()
    }

    pub fn callers(&self) -> Vec<Identity> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(caller, _)| caller.clone())
            .collect()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn profile(&self) -> Option<ProfileRecord> {
        self.profile.lock().unwrap().clone()
    }

    pub fn set_profile(&self, profile: Option<ProfileRecord>) {
        *self.profile.lock().unwrap() = profile;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContractGateway for RecordingGateway {
    async fn get_profile(&self, _identity: &Identity) -> Result<Option<ProfileRecord>, GatewayError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(GatewayError::Transport("rpc unreachable".to_string()));
        }
        Ok(self.profile())
    }

    async fn submit(&self, caller: &Identity, call: ContractCall) -> Result<TxReceipt, GatewayError> {
        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((caller.clone(), call.clone()));
            calls.len()
        };
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(GatewayError::Rejected("User rejected the request".to_string()));
        }

        let mut profile = self.profile.lock().unwrap();
        match call {
            ContractCall::CreateProfile {
                username,
                bio,
                avatar_uri,
            }
            | ContractCall::UpdateProfile {
                username,
                bio,
                avatar_uri,
            } => {
                let record = profile.get_or_insert_with(ProfileRecord::default);
                record.username = username;
                record.bio = bio;
                record.avatar_uri = avatar_uri;
                record.is_created = true;
            }
            ContractCall::CreatePost { .. } => {
                if let Some(record) = profile.as_mut() {
                    record.post_count += 1;
                }
            }
        }

        Ok(TxReceipt {
            tx_hash: format!("0x{:064x}", count),
        })
    }
}

// Writes land in the inner gateway, but reads keep answering with a fixed
// record until `catch_up` is called, like an RPC node behind the chain head.
pub struct StaleReadGateway {
    pub inner: Arc<RecordingGateway>,
    stale: Mutex<Option<ProfileRecord>>,
    caught_up: AtomicBool,
}

impl StaleReadGateway {
    pub fn new(stale: Option<ProfileRecord>) -> Arc<Self> {
        Arc::new(Self {
            inner: RecordingGateway::with_profile(stale.clone()),
            stale: Mutex::new(stale),
            caught_up: AtomicBool::new(false),
        })
    }

    pub fn catch_up(&self) {
        self.caught_up.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContractGateway for StaleReadGateway {
    async fn get_profile(&self, identity: &Identity) -> Result<Option<ProfileRecord>, GatewayError> {
        if self.caught_up.load(Ordering::SeqCst) {
            return self.inner.get_profile(identity).await;
        }
        Ok(self.stale.lock().unwrap().clone())
    }

    async fn submit(&self, caller: &Identity, call: ContractCall) -> Result<TxReceipt, GatewayError> {
        self.inner.submit(caller, call).await
    }
}

pub struct FailingUploader;

#[async_trait]
impl MediaUploader for FailingUploader {
    async fn upload_media(&self, file: &MediaFile) -> Result<String, UploadError> {
        Err(UploadError::EmptyFile(file.file_name.clone()))
    }
}

pub fn profile_editor(
    gateway: Arc<RecordingGateway>,
    notifier: Arc<NotificationLog>,
) -> ProfileEditor {
    let config = ClientConfig::default();
    let uploader = Arc::new(PlaceholderUploader::new(config.avatar_placeholder_uri.clone()));
    ProfileEditor::new(&config, gateway, uploader, notifier)
}

pub fn feed_composer(gateway: Arc<RecordingGateway>, notifier: Arc<NotificationLog>) -> FeedComposer {
    let config = ClientConfig::default();
    let uploader = Arc::new(PlaceholderUploader::new(config.media_placeholder_uri));
    FeedComposer::new(gateway, uploader, notifier)
}

pub fn temp_store() -> (TempDir, Arc<SqliteStore>) {
    let dir = tempfile::tempdir().expect("Failed to create test directory");
    let db_path = dir.path().join("client.db");
    let store = SqliteStore::open(db_path.to_str().expect("utf-8 temp path"))
        .expect("Failed to open test database");
    (dir, Arc::new(store))
}
