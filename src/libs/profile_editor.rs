//! Profile create/update form.
//!
//! The cached contract record decides which write a submit sends: an
//! `updateProfile` when the record says it was created, a `createProfile`
//! otherwise. Submits are refused until a read for the session's identity
//! has succeeded, so an unknown record state never turns into a create.

use crate::libs::core::config::ClientConfig;
use crate::libs::core::models::{Identity, ProfileForm, ProfileRecord};
use crate::libs::core::validation::{truncate_chars, validate_profile_form, FormLimits};
use crate::libs::ffi::models::ProfileScreen;
use crate::libs::gateway::{ContractCall, ContractGateway, SubmitOutcome};
use crate::libs::media::{MediaFile, MediaUploader, UploadError};
use crate::libs::notification::Notifier;
use crate::libs::pending::PendingFlag;
use crate::libs::session::Session;
use crate::libs::view;
use crate::ClientError;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorPhase {
    Idle,
    Editing,
    Submitting,
}

pub struct ProfileEditor {
    gateway: Arc<dyn ContractGateway>,
    uploader: Arc<dyn MediaUploader>,
    notifier: Arc<dyn Notifier>,
    limits: FormLimits,
    avatar_placeholder: String,
    loaded_for: Option<Identity>,
    record: Option<ProfileRecord>,
    form: ProfileForm,
    editing: bool,
    load_failed: bool,
    // set after a create until a read reports the record as created
    unconfirmed_create: bool,
    pending: PendingFlag,
}

impl ProfileEditor {
    pub fn new(
        config: &ClientConfig,
        gateway: Arc<dyn ContractGateway>,
        uploader: Arc<dyn MediaUploader>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            gateway,
            uploader,
            notifier,
            limits: config.form_limits(),
            avatar_placeholder: config.avatar_placeholder_uri.clone(),
            loaded_for: None,
            record: None,
            form: ProfileForm::default(),
            editing: false,
            load_failed: false,
            unconfirmed_create: false,
            pending: PendingFlag::new(),
        }
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn record(&self) -> Option<&ProfileRecord> {
        self.record.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn pending_flag(&self) -> PendingFlag {
        self.pending.clone()
    }

    pub fn has_record(&self) -> bool {
        self.record.as_ref().is_some_and(|record| record.is_created)
    }

    pub fn phase(&self) -> EditorPhase {
        if self.pending.is_pending() {
            EditorPhase::Submitting
        } else if self.editing || !self.has_record() {
            EditorPhase::Editing
        } else {
            EditorPhase::Idle
        }
    }

    /// Read the profile for the session's identity and sync the form from it.
    pub async fn load(&mut self, session: &Session) -> Result<(), ClientError> {
        require_logged_in(session)?;
        let identity = session.identity().ok_or(ClientError::NotConnected)?;

        if self.loaded_for.as_ref() != Some(&identity) {
            debug!(%identity, "Identity changed, discarding cached profile");
            self.record = None;
            self.form = ProfileForm::default();
            self.editing = false;
            self.unconfirmed_create = false;
        }

        self.read_profile(&identity).await
    }

    async fn read_profile(&mut self, identity: &Identity) -> Result<(), ClientError> {
        match self.gateway.get_profile(identity).await {
            Ok(fetched) => {
                self.loaded_for = Some(identity.clone());
                self.load_failed = false;
                self.apply_fetched(fetched);
                Ok(())
            }
            Err(err) => {
                warn!(%identity, "Profile read failed: {err}");
                self.loaded_for = Some(identity.clone());
                self.load_failed = true;
                Err(err.into())
            }
        }
    }

    fn apply_fetched(&mut self, fetched: Option<ProfileRecord>) {
        let confirmed = fetched.as_ref().is_some_and(|record| record.is_created);
        if self.unconfirmed_create && !confirmed {
            debug!("Read has not caught up with the create yet, keeping local record");
            return;
        }
        self.unconfirmed_create = false;

        match fetched {
            Some(record) => {
                if self.record.as_ref() != Some(&record) {
                    self.form = ProfileForm::from(&record);
                    self.record = Some(record);
                }
            }
            None => self.record = None,
        }
    }

    pub fn begin_edit(&mut self) -> Result<(), ClientError> {
        if !self.has_record() {
            return Err(ClientError::NoProfileToEdit);
        }
        self.editing = true;
        Ok(())
    }

    pub fn set_username(&mut self, username: &str) {
        self.form.username = truncate_chars(username, self.limits.max_username_chars);
    }

    pub fn set_bio(&mut self, bio: &str) {
        self.form.bio = truncate_chars(bio, self.limits.max_bio_chars);
    }

    pub fn set_avatar_uri(&mut self, avatar_uri: &str) {
        self.form.avatar_uri = avatar_uri.to_string();
    }

    /// Discard unsaved edits and restore the last fetched record.
    pub fn cancel_edit(&mut self) -> Result<(), ClientError> {
        if self.pending.is_pending() {
            return Err(ClientError::WriteInFlight);
        }
        self.editing = false;
        self.form = self
            .record
            .as_ref()
            .map(ProfileForm::from)
            .unwrap_or_default();
        Ok(())
    }

    pub async fn upload_avatar(&mut self, file: &MediaFile) -> Result<String, ClientError> {
        if !file.is_image() {
            self.notifier.error("Failed to upload image");
            return Err(UploadError::UnsupportedType(file.content_type.clone()).into());
        }

        match self.uploader.upload_media(file).await {
            Ok(uri) => {
                self.form.avatar_uri = uri.clone();
                Ok(uri)
            }
            Err(err) => {
                error!(file = %file.file_name, "Error uploading avatar: {err}");
                self.notifier.error("Failed to upload image");
                Err(err.into())
            }
        }
    }

    pub async fn submit_profile(&mut self, session: &Session) -> Result<SubmitOutcome, ClientError> {
        require_logged_in(session)?;
        let identity = session.identity().ok_or(ClientError::NotConnected)?;
        if self.load_failed || self.loaded_for.as_ref() != Some(&identity) {
            return Err(ClientError::ProfileUnavailable);
        }
        validate_profile_form(&self.form, &self.limits)?;

        let in_flight = self.pending.try_begin().ok_or(ClientError::WriteInFlight)?;

        let updating = self.has_record();
        let ProfileForm {
            username,
            bio,
            avatar_uri,
        } = self.form.clone();
        let call = if updating {
            ContractCall::UpdateProfile {
                username,
                bio,
                avatar_uri,
            }
        } else {
            ContractCall::CreateProfile {
                username,
                bio,
                avatar_uri,
            }
        };

        let request_id = Uuid::now_v7();
        info!(%request_id, function = call.function_name(), caller = %identity, "Submitting profile");

        match self.gateway.submit(&identity, call).await {
            Ok(receipt) => {
                drop(in_flight);
                info!(%request_id, tx_hash = %receipt.tx_hash, "Profile saved");
                self.notifier.success(if updating {
                    "Profile updated successfully!"
                } else {
                    "Profile created successfully!"
                });
                self.editing = false;
                if !updating {
                    self.record_local_create();
                }

                if let Err(err) = self.read_profile(&identity).await {
                    warn!(%request_id, "Could not refresh profile after save: {err}");
                }
                Ok(SubmitOutcome::Submitted(receipt))
            }
            Err(err) => {
                error!(%request_id, "Error handling profile: {err}");
                self.notifier.error("Failed to save profile");
                Err(err.into())
            }
        }
    }

    // The receipt arrives before the contract read reflects it; hold the
    // submitted fields as a created record so the next submit is an update.
    fn record_local_create(&mut self) {
        let (post_count, follower_count) = self
            .record
            .as_ref()
            .map(|record| (record.post_count, record.follower_count))
            .unwrap_or_default();
        self.record = Some(ProfileRecord {
            username: self.form.username.clone(),
            bio: self.form.bio.clone(),
            avatar_uri: self.form.avatar_uri.clone(),
            is_created: true,
            post_count,
            follower_count,
        });
        self.unconfirmed_create = true;
    }

    pub fn view(&self, session: &Session) -> ProfileScreen {
        if !session.is_logged_in() {
            return ProfileScreen::Login {
                view: view::login_view(),
            };
        }

        match self.record.as_ref().filter(|record| record.is_created) {
            Some(record) if !self.editing => ProfileScreen::Card {
                view: view::profile_card_view(record, &self.avatar_placeholder),
            },
            _ => ProfileScreen::Form {
                view: view::profile_form_view(
                    &self.form,
                    self.has_record(),
                    self.editing,
                    self.pending.is_pending(),
                    &self.avatar_placeholder,
                    &self.limits,
                ),
            },
        }
    }
}

fn require_logged_in(session: &Session) -> Result<(), ClientError> {
    if session.is_logged_in() {
        Ok(())
    } else {
        Err(ClientError::NotLoggedIn)
    }
}
