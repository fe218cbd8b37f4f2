use crate::entities::users::User as UserEntity;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Accounts above this privilege level are shown on public rankings.
pub const RANKED_PRIVILEGE_THRESHOLD: i32 = 2;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub username_safe: String,
    pub country: String,
    pub privileges: i32,
    pub created_at: DateTime<Utc>,
    pub latest_activity: DateTime<Utc>,
}

pub(crate) fn timestamp(seconds: i32) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds as i64, 0).unwrap_or_default()
}

impl From<UserEntity> for User {
    fn from(value: UserEntity) -> Self {
        Self {
            user_id: value.id,
            username: value.name,
            username_safe: value.safe_name,
            country: value.country.to_uppercase(),
            privileges: value.privileges,
            created_at: timestamp(value.creation_time),
            latest_activity: timestamp(value.latest_activity),
        }
    }
}
