use crate::entities::beatmaps::Beatmap;
use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Score {
    pub id: u64,
    pub userid: i32,
    pub mode: i8,
    pub status: i8,
    pub score: i32,
    pub pp: f32,
    pub acc: f32,
    pub max_combo: i32,
    pub mods: i32,
    pub grade: String,
    pub play_time: NaiveDateTime,
    pub map_md5: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct ScoreWithBeatmap {
    #[sqlx(flatten)]
    pub score: Score,
    #[sqlx(flatten)]
    pub beatmap: Beatmap,
}
