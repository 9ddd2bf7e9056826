pub mod auth;
pub mod core;
pub mod feed_composer;
pub mod ffi;
pub mod gateway;
pub mod media;
pub mod notification;
pub mod pending;
pub mod profile_editor;
pub mod session;
pub mod storage;
pub mod view;
