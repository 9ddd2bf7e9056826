// Rust models for the screens that will be rendered by the front-end

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct LoginView {
    pub title: String,
    pub prompt: String,
    pub submit_label: String,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct ProfileFormView {
    pub username: String,
    pub bio: String,
    pub avatar_src: String,
    pub submit_label: String,
    pub show_cancel: bool,
    pub controls_disabled: bool,
    pub max_username_chars: u32,
    pub max_bio_chars: u32,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct ProfileCardView {
    pub username: String,
    pub bio: String,
    pub avatar_src: String,
    pub post_count: u64,
    pub follower_count: u64,
    pub show_edit: bool,
}

#[derive(Clone, Debug, PartialEq, uniffi::Enum)]
pub enum ProfileScreen {
    Login { view: LoginView },
    Form { view: ProfileFormView },
    Card { view: ProfileCardView },
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct ComposerView {
    pub content: String,
    pub media_uri: String,
    pub placeholder: String,
    pub post_enabled: bool,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct PostCardView {
    pub username: String,
    pub content: String,
    pub likes: u32,
    pub comments: u32,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct FeedView {
    pub composer: ComposerView,
    pub posts: Vec<PostCardView>,
}
