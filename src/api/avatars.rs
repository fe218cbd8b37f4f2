use crate::api::{RequestContext, decoded};
use crate::common::error::{AppError, ServiceResult};
use crate::common::session::CurrentUser;
use crate::settings::AppSettings;
use crate::usecases::avatars;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::{Multipart, Path};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::warn;

const AVATAR_FIELD: &str = "avatar";

pub async fn avatar(
    ctx: RequestContext,
    path: Result<Path<i32>, PathRejection>,
) -> ServiceResult<Response> {
    let Path(user_id) = decoded(path)?;
    match avatars::fetch(&ctx, user_id).await {
        Ok(avatar) => {
            let content_type = avatars::content_type(avatar.extension);
            Ok(([(CONTENT_TYPE, content_type)], avatar.data).into_response())
        }
        Err(AppError::AvatarsNotFound) => {
            let default_avatar_url = &AppSettings::get().default_avatar_url;
            Ok(Redirect::to(default_avatar_url).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn upload(
    ctx: RequestContext,
    current_user: CurrentUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> ServiceResult<StatusCode> {
    let mut multipart = decoded(multipart)?;
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(AppError::DecodingRequestFailed),
            Err(e) => {
                warn!("Failed to read avatar upload: {e}");
                return Err(AppError::DecodingRequestFailed);
            }
        };
        if field.name() != Some(AVATAR_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to read avatar upload: {e}");
                return Err(AppError::DecodingRequestFailed);
            }
        };
        avatars::upload(&ctx, current_user.user_id, &filename, &data).await?;
        return Ok(StatusCode::NO_CONTENT);
    }
}
