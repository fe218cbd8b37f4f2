use crate::models::scores::BestScore;
use crate::models::stats::Stats;
use crate::models::users::User;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub user: User,
    pub stats: Stats,
    pub best_scores: Vec<BestScore>,
}
