use crate::entities::users::{Credentials, User};
use async_trait::async_trait;
use sqlx::{MySql, Pool};

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str = "id, name, safe_name, country, priv, creation_time, latest_activity";

#[async_trait]
pub trait UsersRepository: Sync + Send {
    async fn fetch_user(&self, user_id: i32) -> sqlx::Result<User>;
    async fn fetch_credentials(&self, user_id: i32) -> sqlx::Result<Credentials>;
    async fn fetch_credentials_by_safe_name(&self, safe_name: &str) -> sqlx::Result<Credentials>;
    async fn update_password_hash(&self, user_id: i32, pw_bcrypt: &str) -> sqlx::Result<()>;
}

#[async_trait]
impl UsersRepository for Pool<MySql> {
    async fn fetch_user(&self, user_id: i32) -> sqlx::Result<User> {
        const QUERY: &str = const_str::concat!(
            "SELECT ",
            READ_FIELDS,
            " FROM ",
            TABLE_NAME,
            " WHERE id = ?"
        );
        sqlx::query_as(QUERY).bind(user_id).fetch_one(self).await
    }

    async fn fetch_credentials(&self, user_id: i32) -> sqlx::Result<Credentials> {
        const QUERY: &str =
            const_str::concat!("SELECT id, pw_bcrypt FROM ", TABLE_NAME, " WHERE id = ?");
        sqlx::query_as(QUERY).bind(user_id).fetch_one(self).await
    }

    async fn fetch_credentials_by_safe_name(&self, safe_name: &str) -> sqlx::Result<Credentials> {
        const QUERY: &str =
            const_str::concat!("SELECT id, pw_bcrypt FROM ", TABLE_NAME, " WHERE safe_name = ?");
        sqlx::query_as(QUERY).bind(safe_name).fetch_one(self).await
    }

    async fn update_password_hash(&self, user_id: i32, pw_bcrypt: &str) -> sqlx::Result<()> {
        const QUERY: &str =
            const_str::concat!("UPDATE ", TABLE_NAME, " SET pw_bcrypt = ? WHERE id = ?");
        let result = sqlx::query(QUERY)
            .bind(pw_bcrypt)
            .bind(user_id)
            .execute(self)
            .await?;
        if result.rows_affected() == 0 {
            // MySQL reports 0 for an unchanged row too, so confirm the account still exists
            self.fetch_credentials(user_id).await?;
        }
        Ok(())
    }
}
