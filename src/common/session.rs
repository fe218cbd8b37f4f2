use crate::common::error::AppError;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, Key, SameSite};

pub const SESSION_COOKIE: &str = "user_id";
const SESSION_MAX_AGE: time::Duration = time::Duration::days(1);

/// The account id carried by the signed session cookie.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: i32,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = match SignedCookieJar::<Key>::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };
        current_user(&jar).ok_or(AppError::Unauthorized)
    }
}

pub fn current_user(jar: &SignedCookieJar) -> Option<CurrentUser> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
        .map(|user_id| CurrentUser { user_id })
}

pub fn session_cookie(user_id: i32, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, user_id.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(SESSION_MAX_AGE)
        .build()
}

pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}
