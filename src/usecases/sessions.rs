use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, storage};
use crate::common::names::safe_name;
use crate::models::users::User;
use crate::repositories::users::UsersRepository;
use crate::usecases::passwords;
use tracing::info;

/// Resolves a login attempt to the account it belongs to.
/// Unknown accounts and wrong passwords are indistinguishable to the caller.
pub async fn authenticate<C: Context>(ctx: &C, username: &str, password: &str) -> ServiceResult<User> {
    let username_safe = safe_name(username);
    let credentials = match ctx.db().fetch_credentials_by_safe_name(&username_safe).await {
        Ok(credentials) => credentials,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::SessionsInvalidCredentials),
        Err(e) => return storage(e),
    };

    if !passwords::verify(&credentials.pw_bcrypt, password)? {
        return Err(AppError::SessionsInvalidCredentials);
    }

    let user = match ctx.db().fetch_user(credentials.id).await {
        Ok(user) => User::from(user),
        Err(sqlx::Error::RowNotFound) => return Err(AppError::SessionsInvalidCredentials),
        Err(e) => return storage(e),
    };
    info!(user_id = user.user_id, "User logged in");
    Ok(user)
}
