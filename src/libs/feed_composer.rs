use crate::libs::core::models::PostDraft;
use crate::libs::ffi::models::FeedView;
use crate::libs::gateway::{ContractCall, ContractGateway, SubmitOutcome};
use crate::libs::media::{MediaFile, MediaUploader};
use crate::libs::notification::Notifier;
use crate::libs::pending::PendingFlag;
use crate::libs::session::Session;
use crate::libs::view;
use crate::ClientError;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

pub struct FeedComposer {
    gateway: Arc<dyn ContractGateway>,
    uploader: Arc<dyn MediaUploader>,
    notifier: Arc<dyn Notifier>,
    draft: PostDraft,
    pending: PendingFlag,
}

impl FeedComposer {
    pub fn new(
        gateway: Arc<dyn ContractGateway>,
        uploader: Arc<dyn MediaUploader>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            gateway,
            uploader,
            notifier,
            draft: PostDraft::default(),
            pending: PendingFlag::new(),
        }
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn pending_flag(&self) -> PendingFlag {
        self.pending.clone()
    }

    pub fn set_content(&mut self, content: &str) {
        self.draft.content = content.to_string();
    }

    pub async fn attach_media(&mut self, file: &MediaFile) -> Result<String, ClientError> {
        match self.uploader.upload_media(file).await {
            Ok(uri) => {
                self.draft.media_uri = uri.clone();
                Ok(uri)
            }
            Err(err) => {
                error!(file = %file.file_name, "Error uploading media: {err}");
                self.notifier.error("Failed to upload media");
                Err(err.into())
            }
        }
    }

    /// Send the draft as a `createPost`. An empty draft is ignored; a failed
    /// write leaves the draft in place so it can be retried.
    pub async fn submit_post(&mut self, session: &Session) -> Result<SubmitOutcome, ClientError> {
        if self.draft.content.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }
        let identity = session.identity().ok_or(ClientError::NotConnected)?;
        let _in_flight = self.pending.try_begin().ok_or(ClientError::WriteInFlight)?;

        let call = ContractCall::CreatePost {
            content: self.draft.content.clone(),
            media_uri: self.draft.media_uri.clone(),
        };
        let request_id = Uuid::now_v7();
        info!(%request_id, caller = %identity, has_media = !self.draft.media_uri.is_empty(), "Submitting post");

        match self.gateway.submit(&identity, call).await {
            Ok(receipt) => {
                info!(%request_id, tx_hash = %receipt.tx_hash, "Post created");
                self.draft.clear();
                self.notifier.success("Post created successfully!");
                Ok(SubmitOutcome::Submitted(receipt))
            }
            Err(err) => {
                error!(%request_id, "Error creating post: {err}");
                self.notifier.error("Failed to create post");
                Err(err.into())
            }
        }
    }

    pub fn view(&self) -> FeedView {
        FeedView {
            composer: view::composer_view(&self.draft, self.pending.is_pending()),
            posts: view::default_post_cards(),
        }
    }
}
