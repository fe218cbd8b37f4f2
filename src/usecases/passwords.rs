use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, storage, unexpected};
use crate::repositories::users::UsersRepository;
use bcrypt::{BcryptError, DEFAULT_COST};
use md5::{Digest, Md5};
use tracing::{error, info};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The game client only ever sends md5(password), so stored hashes wrap that digest.
pub fn md5_hex(plaintext: &str) -> String {
    format!("{:x}", Md5::digest(plaintext.as_bytes()))
}

fn compare(candidate: &str, stored_hash: &str) -> ServiceResult<bool> {
    match bcrypt::verify(candidate, stored_hash) {
        Ok(matches) => Ok(matches),
        Err(
            e @ (BcryptError::InvalidHash(_)
            | BcryptError::InvalidPrefix(_)
            | BcryptError::InvalidCost(_)
            | BcryptError::CostNotAllowed(_)
            | BcryptError::InvalidBase64(_)),
        ) => {
            error!("Stored password hash is malformed: {e}");
            Err(AppError::PasswordsMalformedHash)
        }
        Err(e) => unexpected(e),
    }
}

/// Checks `plaintext` against `bcrypt(md5(plaintext))`, falling back to a
/// plain `bcrypt(plaintext)` comparison for hashes that predate the md5 wrapping.
pub fn verify(stored_hash: &str, plaintext: &str) -> ServiceResult<bool> {
    if compare(&md5_hex(plaintext), stored_hash)? {
        return Ok(true);
    }
    compare(plaintext, stored_hash)
}

pub fn rehash(plaintext: &str) -> ServiceResult<String> {
    hash_with_cost(plaintext, DEFAULT_COST)
}

pub(crate) fn hash_with_cost(plaintext: &str, cost: u32) -> ServiceResult<String> {
    match bcrypt::hash(md5_hex(plaintext), cost) {
        Ok(hash) => Ok(hash),
        Err(e) => unexpected(e),
    }
}

pub async fn change_password<C: Context>(
    ctx: &C,
    user_id: i32,
    old_password: &str,
    new_password: &str,
) -> ServiceResult<()> {
    if new_password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::PasswordsTooShort);
    }

    let credentials = match ctx.db().fetch_credentials(user_id).await {
        Ok(credentials) => credentials,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::UsersNotFound),
        Err(e) => return storage(e),
    };
    if !verify(&credentials.pw_bcrypt, old_password)? {
        return Err(AppError::PasswordsIncorrect);
    }

    let new_hash = rehash(new_password)?;
    match ctx.db().update_password_hash(user_id, &new_hash).await {
        Ok(()) => {
            info!(user_id, "Password changed");
            Ok(())
        }
        Err(sqlx::Error::RowNotFound) => Err(AppError::UsersNotFound),
        Err(e) => storage(e),
    }
}
