use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

/// Logs a failure of the relational store and surfaces it as [`AppError::StorageUnavailable`].
#[track_caller]
pub fn storage<T>(e: sqlx::Error) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("A storage error has occurred at {caller}: {e}");
    Err(AppError::StorageUnavailable)
}

#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    Unexpected,
    Unauthorized,
    DecodingRequestFailed,
    StorageUnavailable,
    InvalidMode,

    AvatarsNotFound,
    AvatarsUnsupportedFormat,
    AvatarsEmpty,

    PasswordsTooShort,
    PasswordsIncorrect,
    PasswordsMalformedHash,

    SessionsInvalidCredentials,

    UsersNotFound,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::Unauthorized => "unauthorized",
            AppError::DecodingRequestFailed => "decoding_request_failed",
            AppError::StorageUnavailable => "storage_unavailable",
            AppError::InvalidMode => "invalid_mode",

            AppError::AvatarsNotFound => "avatars.not_found",
            AppError::AvatarsUnsupportedFormat => "avatars.unsupported_format",
            AppError::AvatarsEmpty => "avatars.empty",

            AppError::PasswordsTooShort => "passwords.too_short",
            AppError::PasswordsIncorrect => "passwords.incorrect",
            AppError::PasswordsMalformedHash => "passwords.malformed_hash",

            AppError::SessionsInvalidCredentials => "sessions.invalid_credentials",

            AppError::UsersNotFound => "users.not_found",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected
            | AppError::StorageUnavailable
            | AppError::PasswordsMalformedHash => "An unexpected error has occurred.",
            AppError::Unauthorized => "You must be logged in to perform this action.",
            AppError::DecodingRequestFailed => "Failed to decode request",
            AppError::InvalidMode => "Mode must be one of 0 (std), 1 (taiko), 2 (catch), 3 (mania).",

            AppError::AvatarsNotFound => "This user has no avatar.",
            AppError::AvatarsUnsupportedFormat => "Only jpg/png avatars are allowed.",
            AppError::AvatarsEmpty => "The uploaded avatar is empty.",

            AppError::PasswordsTooShort => "New password must be at least 8 characters.",
            AppError::PasswordsIncorrect => "Old password is incorrect.",

            AppError::SessionsInvalidCredentials => {
                "You have entered an invalid username or password."
            }

            AppError::UsersNotFound => "This user does not exist.",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::DecodingRequestFailed
            | AppError::InvalidMode
            | AppError::AvatarsUnsupportedFormat
            | AppError::AvatarsEmpty
            | AppError::PasswordsTooShort => StatusCode::BAD_REQUEST,

            AppError::Unauthorized
            | AppError::PasswordsIncorrect
            | AppError::SessionsInvalidCredentials => StatusCode::UNAUTHORIZED,

            AppError::AvatarsNotFound | AppError::UsersNotFound => StatusCode::NOT_FOUND,

            AppError::Unexpected
            | AppError::StorageUnavailable
            | AppError::PasswordsMalformedHash => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}
