use chrono::Utc;

#[derive(Clone, Debug, PartialEq)]
pub struct CredentialRecord {
    pub wallet_id: String,
    pub salt: Vec<u8>,
    pub verifier: Vec<u8>,
    pub created_at: i64,
}

impl CredentialRecord {
    pub fn new(wallet_id: String, salt: Vec<u8>, verifier: Vec<u8>) -> Self {
        Self {
            wallet_id,
            salt,
            verifier,
            created_at: Utc::now().timestamp(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediaRecord {
    pub uri: String,
    pub content_type: String,
    pub content: Vec<u8>,
    pub created_at: i64,
}

impl MediaRecord {
    pub fn new(uri: String, content_type: String, content: Vec<u8>) -> Self {
        Self {
            uri,
            content_type,
            content,
            created_at: Utc::now().timestamp(),
        }
    }

    pub fn from_db(uri: String, content_type: String, content: Vec<u8>, created_at: i64) -> Self {
        Self {
            uri,
            content_type,
            content,
            created_at,
        }
    }
}
