use crate::api::{RequestContext, decoded};
use crate::common::error::ServiceResponse;
use crate::common::session;
use crate::models::modes::Mode;
use crate::models::profiles::Profile;
use crate::usecases::profiles;
use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum_extra::extract::SignedCookieJar;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ProfileArgs {
    #[serde(default)]
    pub mode: i32,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: Profile,
    pub mode_name: Option<&'static str>,
    pub is_own_profile: bool,
}

pub async fn profile(
    ctx: RequestContext,
    jar: SignedCookieJar,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<ProfileArgs>, QueryRejection>,
) -> ServiceResponse<ProfileResponse> {
    let Path(user_id) = decoded(path)?;
    let Query(args) = decoded(query)?;
    let profile = profiles::fetch(&ctx, user_id, args.mode).await?;
    let is_own_profile = session::current_user(&jar).is_some_and(|user| user.user_id == user_id);
    Ok(Json(ProfileResponse {
        profile,
        mode_name: Mode::try_from(args.mode).ok().map(|mode| mode.name()),
        is_own_profile,
    }))
}
