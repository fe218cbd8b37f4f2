use crate::common::error::AppError;
use crate::entities::stats::LeaderboardRow;
use crate::models::stats::Stats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    /// 1-based position in the leaderboard window.
    pub rank: usize,
    pub user_id: i32,
    pub username: String,
    pub country: String,
    pub privileges: i32,
    pub stats: Stats,
}

impl RankedEntry {
    pub fn from_row(rank: usize, row: LeaderboardRow) -> Result<Self, AppError> {
        Ok(Self {
            rank,
            user_id: row.id,
            username: row.name,
            country: row.country.to_uppercase(),
            privileges: row.privileges,
            stats: Stats::try_from(row.stats)?,
        })
    }
}
