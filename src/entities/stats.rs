use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Stats {
    pub id: i32,
    pub mode: i8,
    pub tscore: u64,
    pub rscore: u64,
    pub pp: u32,
    pub plays: u32,
    pub playtime: u32,
    pub acc: f32,
    pub max_combo: u32,
}

/// A `stats` row joined with the owning account.
#[derive(Debug, Clone, FromRow)]
pub struct LeaderboardRow {
    pub id: i32,
    pub name: String,
    pub country: String,
    #[sqlx(rename = "priv")]
    pub privileges: i32,
    #[sqlx(flatten)]
    pub stats: Stats,
}
