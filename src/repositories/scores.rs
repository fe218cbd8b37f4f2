use crate::entities::scores::ScoreWithBeatmap;
use crate::models::modes::Mode;
use crate::models::scores::ScoreStatus;
use async_trait::async_trait;
use sqlx::{MySql, Pool};

#[async_trait]
pub trait ScoresRepository: Sync + Send {
    /// Counted scores of a player in `mode` joined with their beatmap, highest pp first.
    async fn fetch_best_scores(
        &self,
        user_id: i32,
        mode: Mode,
        limit: u32,
    ) -> sqlx::Result<Vec<ScoreWithBeatmap>>;
}

#[async_trait]
impl ScoresRepository for Pool<MySql> {
    async fn fetch_best_scores(
        &self,
        user_id: i32,
        mode: Mode,
        limit: u32,
    ) -> sqlx::Result<Vec<ScoreWithBeatmap>> {
        const QUERY: &str = r#"
            SELECT s.id, s.userid, s.mode, s.status, s.score, s.pp, s.acc,
            s.max_combo, s.mods, s.grade, s.play_time, s.map_md5,
            m.id AS map_id, m.set_id, m.md5, m.artist, m.title, m.version,
            m.creator, m.status AS map_status
            FROM scores s
            INNER JOIN maps m ON s.map_md5 = m.md5
            WHERE s.userid = ? AND s.mode = ? AND s.status = ?
            ORDER BY s.pp DESC
            LIMIT ?
        "#;
        sqlx::query_as(QUERY)
            .bind(user_id)
            .bind(mode.as_i8())
            .bind(ScoreStatus::Best as i8)
            .bind(limit)
            .fetch_all(self)
            .await
    }
}
