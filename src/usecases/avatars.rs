use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::repositories::avatars::{AVATAR_EXTENSIONS, Avatar, AvatarsRepository};
use std::path::Path;
use tracing::info;

pub async fn fetch<C: Context>(ctx: &C, user_id: i32) -> ServiceResult<Avatar> {
    match ctx.avatars().fetch(user_id).await {
        Ok(Some(avatar)) => Ok(avatar),
        Ok(None) => Err(AppError::AvatarsNotFound),
        Err(e) => unexpected(e),
    }
}

/// Maps an uploaded file name onto one of the supported extensions.
pub fn extension_of(filename: &str) -> ServiceResult<&'static str> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .ok_or(AppError::AvatarsUnsupportedFormat)?;
    AVATAR_EXTENSIONS
        .into_iter()
        .find(|supported| *supported == extension)
        .ok_or(AppError::AvatarsUnsupportedFormat)
}

/// Replaces the avatar of `user_id`, removing any file stored under another extension.
pub async fn upload<C: Context>(
    ctx: &C,
    user_id: i32,
    filename: &str,
    data: &[u8],
) -> ServiceResult<()> {
    let extension = extension_of(filename)?;
    if data.is_empty() {
        return Err(AppError::AvatarsEmpty);
    }

    if let Err(e) = ctx.avatars().delete_other_extensions(user_id, extension).await {
        return unexpected(e);
    }
    if let Err(e) = ctx.avatars().store(user_id, extension, data).await {
        return unexpected(e);
    }
    info!(user_id, extension, size = data.len(), "Avatar updated");
    Ok(())
}

pub fn content_type(extension: &str) -> &'static str {
    match extension {
        "png" => "image/png",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::MemoryContext;

    #[test]
    fn extensions_are_case_insensitive() {
        assert_eq!(extension_of("me.PNG"), Ok("png"));
        assert_eq!(extension_of("photo.JpEg"), Ok("jpeg"));
        assert_eq!(extension_of("archive.tar.jpg"), Ok("jpg"));
    }

    #[test]
    fn unsupported_extensions_are_rejected() {
        for filename in ["avatar.gif", "avatar", "avatar.", ".png.exe", "png"] {
            assert_eq!(
                extension_of(filename),
                Err(AppError::AvatarsUnsupportedFormat),
                "{filename}"
            );
        }
    }

    #[test]
    fn content_types() {
        assert_eq!(content_type("png"), "image/png");
        assert_eq!(content_type("jpg"), "image/jpeg");
        assert_eq!(content_type("jpeg"), "image/jpeg");
    }

    #[tokio::test]
    async fn missing_avatar_is_not_found() {
        let ctx = MemoryContext::default();
        assert_eq!(fetch(&ctx, 1).await, Err(AppError::AvatarsNotFound));
    }

    #[tokio::test]
    async fn upload_replaces_other_extensions() {
        let ctx = MemoryContext::default();
        upload(&ctx, 1, "old.jpg", b"old").await.unwrap();
        upload(&ctx, 1, "new.png", b"new").await.unwrap();

        let avatar = fetch(&ctx, 1).await.unwrap();
        assert_eq!(avatar.extension, "png");
        assert_eq!(avatar.data, b"new");
        assert_eq!(ctx.avatars.files.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_upload_is_rejected() {
        let ctx = MemoryContext::default();
        upload(&ctx, 1, "keep.jpg", b"keep").await.unwrap();
        assert_eq!(upload(&ctx, 1, "empty.png", b"").await, Err(AppError::AvatarsEmpty));
        assert_eq!(fetch(&ctx, 1).await.unwrap().data, b"keep");
    }
}
