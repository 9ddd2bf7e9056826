use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const ADDRESS_PREFIX: &str = "0x";
const ADDRESS_HEX_LEN: usize = 40;

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),
}

// Wallet address the profile is keyed by, kept lowercase
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    address: String,
}

impl Identity {
    pub fn parse(address: &str) -> Result<Self, ModelError> {
        let trimmed = address.trim();
        let hex_part = trimmed
            .strip_prefix(ADDRESS_PREFIX)
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| ModelError::InvalidIdentity(address.to_string()))?;

        if hex_part.len() != ADDRESS_HEX_LEN || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ModelError::InvalidIdentity(address.to_string()));
        }

        Ok(Self {
            address: format!("{}{}", ADDRESS_PREFIX, hex_part.to_ascii_lowercase()),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

/// Profile as returned by the contract's `getProfile` read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub username: String,
    pub bio: String,
    pub avatar_uri: String,
    pub is_created: bool,
    pub post_count: u64,
    pub follower_count: u64,
}

/// Editable copy of a profile, without the contract-owned counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub username: String,
    pub bio: String,
    pub avatar_uri: String,
}

impl From<&ProfileRecord> for ProfileForm {
    fn from(record: &ProfileRecord) -> Self {
        Self {
            username: record.username.clone(),
            bio: record.bio.clone(),
            avatar_uri: record.avatar_uri.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub content: String,
    pub media_uri: String,
}

impl PostDraft {
    pub fn clear(&mut self) {
        self.content.clear();
        self.media_uri.clear();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}
