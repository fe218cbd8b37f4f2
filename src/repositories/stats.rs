use crate::entities::stats::{LeaderboardRow, Stats};
use crate::models::modes::Mode;
use crate::models::users::RANKED_PRIVILEGE_THRESHOLD;
use async_trait::async_trait;
use sqlx::{MySql, Pool};

const READ_FIELDS: &str = "s.id, s.mode, s.tscore, s.rscore, s.pp, s.plays, s.playtime, s.acc, s.max_combo";

#[async_trait]
pub trait StatsRepository: Sync + Send {
    async fn fetch_stats(&self, user_id: i32, mode: Mode) -> sqlx::Result<Option<Stats>>;

    /// Ranked accounts with stats in `mode`, highest pp first.
    async fn fetch_leaderboard(&self, mode: Mode, limit: u32) -> sqlx::Result<Vec<LeaderboardRow>>;
}

#[async_trait]
impl StatsRepository for Pool<MySql> {
    async fn fetch_stats(&self, user_id: i32, mode: Mode) -> sqlx::Result<Option<Stats>> {
        const QUERY: &str = const_str::concat!(
            "SELECT ",
            READ_FIELDS,
            " FROM stats s WHERE s.id = ? AND s.mode = ?"
        );
        sqlx::query_as(QUERY)
            .bind(user_id)
            .bind(mode.as_i8())
            .fetch_optional(self)
            .await
    }

    async fn fetch_leaderboard(&self, mode: Mode, limit: u32) -> sqlx::Result<Vec<LeaderboardRow>> {
        const QUERY: &str = r#"
            SELECT u.id, u.name, u.country, u.priv,
            s.mode, s.tscore, s.rscore, s.pp, s.plays, s.playtime, s.acc, s.max_combo
            FROM stats s
            INNER JOIN users u ON s.id = u.id
            WHERE s.mode = ? AND u.priv > ?
            ORDER BY s.pp DESC
            LIMIT ?
        "#;
        sqlx::query_as(QUERY)
            .bind(mode.as_i8())
            .bind(RANKED_PRIVILEGE_THRESHOLD)
            .bind(limit)
            .fetch_all(self)
            .await
    }
}
