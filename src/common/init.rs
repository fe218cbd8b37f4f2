use crate::common::state::AppState;
use crate::repositories::avatars::FileAvatarStore;
use crate::settings::AppSettings;
use axum_extra::extract::cookie::Key;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, Pool};
use tracing::info;

pub fn initialize_logging(settings: &AppSettings) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(settings.level)
        .with_timer(tracing_subscriber::fmt::time())
        .with_level(true);
    if settings.log_json {
        subscriber.json().init();
    } else {
        subscriber.compact().init();
    }
}

pub async fn initialize_state(settings: &AppSettings) -> anyhow::Result<AppState> {
    let db = initialize_db(settings).await?;
    let avatars = initialize_avatars(settings).await?;
    let cookie_key = initialize_cookie_key(settings)?;
    Ok(AppState {
        db,
        avatars,
        cookie_key,
    })
}

pub fn initialize_db(settings: &AppSettings) -> impl Future<Output = sqlx::Result<Pool<MySql>>> {
    MySqlPoolOptions::new()
        .acquire_timeout(settings.db_wait_timeout)
        .max_connections(settings.db_max_connections)
        .connect(&settings.database_url)
}

pub async fn initialize_avatars(settings: &AppSettings) -> anyhow::Result<FileAvatarStore> {
    tokio::fs::create_dir_all(&settings.avatars_path).await?;
    info!(path = %settings.avatars_path.display(), "Serving avatars");
    Ok(FileAvatarStore::new(settings.avatars_path.clone()))
}

pub fn initialize_cookie_key(settings: &AppSettings) -> anyhow::Result<Key> {
    Key::try_from(settings.cookie_secret.as_bytes())
        .map_err(|_| anyhow::anyhow!("COOKIE_SECRET must be at least 64 bytes long"))
}
