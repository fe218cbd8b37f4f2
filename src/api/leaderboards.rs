use crate::api::{RequestContext, decoded};
use crate::common::error::ServiceResponse;
use crate::models::leaderboards::RankedEntry;
use crate::models::modes::Mode;
use crate::usecases::leaderboards;
use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use serde::{Deserialize, Serialize};

const MAX_LIMIT: u32 = 100;

#[derive(Deserialize)]
pub struct LeaderboardArgs {
    #[serde(default)]
    pub mode: i32,
    pub limit: Option<u32>,
}

#[derive(Serialize)]
pub struct LeaderboardResponse {
    pub mode: i32,
    pub mode_name: Option<&'static str>,
    pub entries: Vec<RankedEntry>,
}

pub async fn leaderboard(
    ctx: RequestContext,
    query: Result<Query<LeaderboardArgs>, QueryRejection>,
) -> ServiceResponse<LeaderboardResponse> {
    let Query(args) = decoded(query)?;
    let limit = args
        .limit
        .unwrap_or(leaderboards::DEFAULT_LIMIT)
        .min(MAX_LIMIT);
    let entries = leaderboards::fetch(&ctx, args.mode, limit).await?;
    Ok(Json(LeaderboardResponse {
        mode: args.mode,
        mode_name: Mode::try_from(args.mode).ok().map(|mode| mode.name()),
        entries,
    }))
}
