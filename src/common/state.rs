use crate::repositories::avatars::FileAvatarStore;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::{MySql, Pool};

#[derive(Clone)]
pub struct AppState {
    pub db: Pool<MySql>,
    pub avatars: FileAvatarStore,
    pub cookie_key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
