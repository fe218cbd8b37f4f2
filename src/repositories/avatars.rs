use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Supported extensions, in lookup priority order.
pub const AVATAR_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub extension: &'static str,
    pub data: Vec<u8>,
}

/// A flat blob store holding at most one avatar per account.
#[async_trait]
pub trait AvatarsRepository: Sync + Send {
    async fn fetch(&self, user_id: i32) -> std::io::Result<Option<Avatar>>;
    async fn store(&self, user_id: i32, extension: &'static str, data: &[u8]) -> std::io::Result<()>;
    async fn delete_other_extensions(&self, user_id: i32, keep: &str) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileAvatarStore {
    root: PathBuf,
}

impl FileAvatarStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn path(&self, user_id: i32, extension: &str) -> PathBuf {
        self.root.join(format!("{user_id}.{extension}"))
    }
}

#[async_trait]
impl AvatarsRepository for FileAvatarStore {
    async fn fetch(&self, user_id: i32) -> std::io::Result<Option<Avatar>> {
        for extension in AVATAR_EXTENSIONS {
            match tokio::fs::read(self.path(user_id, extension)).await {
                Ok(data) => return Ok(Some(Avatar { extension, data })),
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(None)
    }

    async fn store(&self, user_id: i32, extension: &'static str, data: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(self.path(user_id, extension), data).await
    }

    async fn delete_other_extensions(&self, user_id: i32, keep: &str) -> std::io::Result<()> {
        for extension in AVATAR_EXTENSIONS.into_iter().filter(|ext| *ext != keep) {
            match tokio::fs::remove_file(self.path(user_id, extension)).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
