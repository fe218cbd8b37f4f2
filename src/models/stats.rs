use crate::common::error::AppError;
use crate::entities::stats::Stats as Entity;
use crate::models::modes::Mode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub user_id: i32,
    /// Raw mode number; validated for stored rows, echoed as requested for empty ones.
    pub mode: i32,
    pub total_score: u64,
    pub ranked_score: u64,
    pub pp: u32,
    pub playcount: u32,
    /// Seconds.
    pub playtime: u32,
    /// Percentage, 0-100.
    pub accuracy: f32,
    pub max_combo: u32,
}

impl Stats {
    /// Zero-valued stats for a player without a row in `mode`.
    pub const fn empty(user_id: i32, mode: i32) -> Self {
        Self {
            user_id,
            mode,
            total_score: 0,
            ranked_score: 0,
            pp: 0,
            playcount: 0,
            playtime: 0,
            accuracy: 0.0,
            max_combo: 0,
        }
    }
}

impl TryFrom<Entity> for Stats {
    type Error = AppError;

    fn try_from(value: Entity) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: value.id,
            mode: Mode::try_from(value.mode)?.as_i32(),
            total_score: value.tscore,
            ranked_score: value.rscore,
            pp: value.pp,
            playcount: value.plays,
            playtime: value.playtime,
            accuracy: value.acc,
            max_combo: value.max_combo,
        })
    }
}
