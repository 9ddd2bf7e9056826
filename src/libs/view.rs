use crate::libs::core::models::{PostDraft, ProfileForm, ProfileRecord};
use crate::libs::core::validation::FormLimits;
use crate::libs::ffi::models::{
    ComposerView, LoginView, PostCardView, ProfileCardView, ProfileFormView,
};
use chrono::{NaiveDate, Utc};

pub const COMPOSER_PLACEHOLDER: &str = "What's on your mind?";

pub fn login_view() -> LoginView {
    LoginView {
        title: "Login".to_string(),
        prompt: "Please enter your Wallet ID and password to log in.".to_string(),
        submit_label: "Login".to_string(),
    }
}

fn avatar_src(avatar_uri: &str, placeholder: &str) -> String {
    if avatar_uri.is_empty() {
        placeholder.to_string()
    } else {
        avatar_uri.to_string()
    }
}

pub fn submit_label(has_record: bool, pending: bool) -> &'static str {
    match (has_record, pending) {
        (true, true) => "Updating...",
        (true, false) => "Update Profile",
        (false, true) => "Creating...",
        (false, false) => "Create Profile",
    }
}

pub fn profile_form_view(
    form: &ProfileForm,
    has_record: bool,
    editing: bool,
    pending: bool,
    avatar_placeholder: &str,
    limits: &FormLimits,
) -> ProfileFormView {
    ProfileFormView {
        username: form.username.clone(),
        bio: form.bio.clone(),
        avatar_src: avatar_src(&form.avatar_uri, avatar_placeholder),
        submit_label: submit_label(has_record, pending).to_string(),
        show_cancel: editing,
        controls_disabled: pending,
        max_username_chars: limits.max_username_chars as u32,
        max_bio_chars: limits.max_bio_chars as u32,
    }
}

pub fn profile_card_view(record: &ProfileRecord, avatar_placeholder: &str) -> ProfileCardView {
    ProfileCardView {
        username: record.username.clone(),
        bio: record.bio.clone(),
        avatar_src: avatar_src(&record.avatar_uri, avatar_placeholder),
        post_count: record.post_count,
        follower_count: record.follower_count,
        show_edit: true,
    }
}

pub fn composer_view(draft: &PostDraft, pending: bool) -> ComposerView {
    ComposerView {
        content: draft.content.clone(),
        media_uri: draft.media_uri.clone(),
        placeholder: COMPOSER_PLACEHOLDER.to_string(),
        post_enabled: !draft.content.is_empty() && !pending,
    }
}

pub fn post_cards_for(date: NaiveDate) -> Vec<PostCardView> {
    vec![PostCardView {
        username: "Anonymous User".to_string(),
        content: "(Your posted content will be here)".to_string(),
        likes: 5,
        comments: 2,
        date: date.format("%-m/%-d/%Y").to_string(),
    }]
}

/// The feed has no read-back of submitted posts yet; it shows one sample card.
#[uniffi::export]
pub fn default_post_cards() -> Vec<PostCardView> {
    post_cards_for(Utc::now().date_naive())
}
