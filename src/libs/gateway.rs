//! Seam over the SocialFi contract.
//!
//! Writes are expressed as [`ContractCall`] values so that the function name
//! and the positional argument order live in one place.

use crate::libs::core::models::{Identity, ProfileRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Transaction rejected: {0}")]
    Rejected(String),
    #[error("Transport Error: {0}")]
    Transport(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractCall {
    CreateProfile {
        username: String,
        bio: String,
        avatar_uri: String,
    },
    UpdateProfile {
        username: String,
        bio: String,
        avatar_uri: String,
    },
    CreatePost {
        content: String,
        media_uri: String,
    },
}

impl ContractCall {
    pub fn function_name(&self) -> &'static str {
        match self {
            ContractCall::CreateProfile { .. } => "createProfile",
            ContractCall::UpdateProfile { .. } => "updateProfile",
            ContractCall::CreatePost { .. } => "createPost",
        }
    }

    /// Arguments in the order the contract signature expects them.
    pub fn args(&self) -> Vec<&str> {
        match self {
            ContractCall::CreateProfile {
                username,
                bio,
                avatar_uri,
            }
            | ContractCall::UpdateProfile {
                username,
                bio,
                avatar_uri,
            } => vec![username.as_str(), bio.as_str(), avatar_uri.as_str()],
            ContractCall::CreatePost { content, media_uri } => {
                vec![content.as_str(), media_uri.as_str()]
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx_hash: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(TxReceipt),
    /// Nothing to send, the gateway was not called.
    Ignored,
}

#[async_trait]
pub trait ContractGateway: Send + Sync {
    async fn get_profile(&self, identity: &Identity) -> Result<Option<ProfileRecord>, GatewayError>;

    async fn submit(&self, caller: &Identity, call: ContractCall) -> Result<TxReceipt, GatewayError>;
}
