use crate::common::error::AppError;
use crate::entities::scores::{Score as ScoreEntity, ScoreWithBeatmap as ScoreWithBeatmapEntity};
use crate::models::beatmaps::Beatmap;
use crate::models::modes::Mode;
use crate::models::mods::Mods;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Failed = 0,
    Submitted = 1,
    Best = 2,
}

impl From<i8> for ScoreStatus {
    fn from(value: i8) -> Self {
        match value {
            1 => Self::Submitted,
            2 => Self::Best,
            _ => Self::Failed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Score {
    pub score_id: u64,
    pub user_id: i32,
    pub beatmap_md5: String,
    pub mode: Mode,
    pub status: ScoreStatus,
    pub score: i32,
    pub pp: f32,
    pub accuracy: f32,
    pub max_combo: i32,
    pub mods: Mods,
    pub grade: String,
    pub played_at: DateTime<Utc>,
}

impl TryFrom<ScoreEntity> for Score {
    type Error = AppError;

    fn try_from(value: ScoreEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            score_id: value.id,
            user_id: value.userid,
            beatmap_md5: value.map_md5,
            mode: Mode::try_from(value.mode)?,
            status: ScoreStatus::from(value.status),
            score: value.score,
            pp: value.pp,
            accuracy: value.acc,
            max_combo: value.max_combo,
            mods: Mods::from_bits_retain(value.mods),
            grade: value.grade,
            played_at: value.play_time.and_utc(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BestScore {
    #[serde(flatten)]
    pub score: Score,
    pub beatmap: Beatmap,
}

impl TryFrom<ScoreWithBeatmapEntity> for BestScore {
    type Error = AppError;

    fn try_from(value: ScoreWithBeatmapEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            score: Score::try_from(value.score)?,
            beatmap: Beatmap::from(value.beatmap),
        })
    }
}
