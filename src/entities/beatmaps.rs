use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Beatmap {
    #[sqlx(rename = "map_id")]
    pub id: i32,
    pub set_id: i32,
    pub md5: String,
    pub artist: String,
    pub title: String,
    pub version: String,
    pub creator: String,
    #[sqlx(rename = "map_status")]
    pub status: i32,
}
