use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub safe_name: String,
    pub country: String,
    #[sqlx(rename = "priv")]
    pub privileges: i32,
    pub creation_time: i32,
    pub latest_activity: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct Credentials {
    pub id: i32,
    pub pw_bcrypt: String,
}
