use crate::entities::beatmaps::Beatmap as BeatmapEntity;
use serde::Serialize;

#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankedStatus {
    NotSubmitted = -1,
    Pending = 0,
    UpdateAvailable = 1,
    Ranked = 2,
    Approved = 3,
    Qualified = 4,
    Loved = 5,
}

impl From<i32> for RankedStatus {
    fn from(value: i32) -> Self {
        match value {
            -1 => Self::NotSubmitted,
            1 => Self::UpdateAvailable,
            2 => Self::Ranked,
            3 => Self::Approved,
            4 => Self::Qualified,
            5 => Self::Loved,
            _ => Self::Pending,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Beatmap {
    pub beatmap_id: i32,
    pub beatmapset_id: i32,
    pub beatmap_md5: String,
    pub artist: String,
    pub title: String,
    pub version: String,
    pub creator: String,
    pub ranked_status: RankedStatus,
}

impl From<BeatmapEntity> for Beatmap {
    fn from(entity: BeatmapEntity) -> Self {
        Self {
            beatmap_id: entity.id,
            beatmapset_id: entity.set_id,
            beatmap_md5: entity.md5,
            artist: entity.artist,
            title: entity.title,
            version: entity.version,
            creator: entity.creator,
            ranked_status: RankedStatus::from(entity.status),
        }
    }
}
