use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult};
use crate::common::init;
use crate::common::state::AppState;
use crate::repositories::avatars::FileAvatarStore;
use crate::settings::AppSettings;
use axum::Router;
use axum::extract::{DefaultBodyLimit, FromRequestParts};
use axum::http::request::Parts;
use axum::response::Redirect;
use axum::routing::{get, post};
use sqlx::{MySql, Pool};
use std::convert::Infallible;
use std::fmt::Display;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub mod avatars;
pub mod leaderboards;
pub mod sessions;
pub mod users;

pub struct RequestContext {
    pub db: Pool<MySql>,
    pub avatars: FileAvatarStore,
}

/// Turns an extractor rejection into the JSON error body used by every route.
pub fn decoded<T, R: Display>(extracted: Result<T, R>) -> ServiceResult<T> {
    extracted.map_err(|rejection| {
        warn!("Failed to decode request: {rejection}");
        AppError::DecodingRequestFailed
    })
}

pub fn router(settings: &AppSettings) -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/leaderboard") }))
        .route("/leaderboard", get(leaderboards::leaderboard))
        .route("/u/{user_id}", get(users::profile))
        .route("/login", post(sessions::login))
        .route("/logout", get(sessions::logout))
        .route("/change-password", post(sessions::change_password))
        .route("/avatar/{user_id}", get(avatars::avatar))
        .route(
            "/avatar",
            post(avatars::upload).layer(DefaultBodyLimit::max(settings.avatar_max_bytes)),
        )
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let app = router(settings)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(settings.app_host, settings.app_port);
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            db: state.db.clone(),
            avatars: state.avatars.clone(),
        })
    }
}

impl Context for RequestContext {
    type Db = Pool<MySql>;
    type Avatars = FileAvatarStore;

    fn db(&self) -> &Pool<MySql> {
        &self.db
    }

    fn avatars(&self) -> &FileAvatarStore {
        &self.avatars
    }
}
