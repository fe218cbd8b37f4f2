use crate::api::{RequestContext, decoded};
use crate::common::error::ServiceResult;
use crate::common::session::{self, CurrentUser};
use crate::models::users::User;
use crate::settings::AppSettings;
use crate::usecases::{passwords, sessions};
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::{Form, Json};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginArgs {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ChangePasswordArgs {
    pub old_password: String,
    pub new_password: String,
}

pub async fn login(
    ctx: RequestContext,
    jar: SignedCookieJar,
    form: Result<Form<LoginArgs>, FormRejection>,
) -> ServiceResult<(SignedCookieJar, Json<User>)> {
    let Form(args) = decoded(form)?;
    let user = sessions::authenticate(&ctx, &args.username, &args.password).await?;
    let cookie = session::session_cookie(user.user_id, AppSettings::get().cookie_secure);
    Ok((jar.add(cookie), Json(user)))
}

pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    (jar.remove(session::removal_cookie()), Redirect::to("/"))
}

pub async fn change_password(
    ctx: RequestContext,
    current_user: CurrentUser,
    form: Result<Form<ChangePasswordArgs>, FormRejection>,
) -> ServiceResult<StatusCode> {
    let Form(args) = decoded(form)?;
    passwords::change_password(
        &ctx,
        current_user.user_id,
        &args.old_password,
        &args.new_password,
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

