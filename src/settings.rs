use crate::common::env::FromEnv;
use std::env;
use std::net::IpAddr;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::Level;

const DEFAULT_AVATAR_URL: &str =
    "https://secure.gravatar.com/avatar/00000000000000000000000000000000?d=mp&f=y";

pub struct AppSettings {
    pub level: Level,
    pub log_json: bool,
    pub app_host: IpAddr,
    pub app_port: u16,

    pub database_url: String,
    pub db_max_connections: u32,
    pub db_wait_timeout: Duration,

    pub avatars_path: PathBuf,
    pub avatar_max_bytes: usize,
    pub default_avatar_url: String,

    pub cookie_secret: String,
    pub cookie_secure: bool,
}

impl AppSettings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv();

        let level = Level::from_env("LOG_LEVEL")?;
        let log_json = bool::from_env_or("LOG_JSON", false)?;
        let app_host = IpAddr::from_env("APP_HOST")?;
        let app_port = u16::from_env("APP_PORT")?;

        let database_url = env::var("DATABASE_URL")?;
        let db_max_connections = u32::from_env("DB_MAX_CONNECTIONS")?;
        let db_wait_timeout_secs = u64::from_env("DB_WAIT_TIMEOUT_SECS")?;
        let db_wait_timeout = Duration::from_secs(db_wait_timeout_secs);

        let avatars_path = PathBuf::from_env("AVATARS_PATH")?;
        let avatar_max_bytes = usize::from_env_or("AVATAR_MAX_BYTES", 2 * 1024 * 1024)?;
        let default_avatar_url =
            env::var("DEFAULT_AVATAR_URL").unwrap_or_else(|_| DEFAULT_AVATAR_URL.to_string());

        let cookie_secret = env::var("COOKIE_SECRET")?;
        let cookie_secure = bool::from_env_or("COOKIE_SECURE", false)?;

        Ok(AppSettings {
            level,
            log_json,
            app_host,
            app_port,

            database_url,
            db_max_connections,
            db_wait_timeout,

            avatars_path,
            avatar_max_bytes,
            default_avatar_url,

            cookie_secret,
            cookie_secure,
        })
    }

    pub fn get() -> &'static AppSettings {
        static SETTINGS: LazyLock<AppSettings> =
            LazyLock::new(|| AppSettings::load_from_env().expect("Failed to load settings"));
        SETTINGS.deref()
    }
}
