use crate::repositories::Database;
use crate::repositories::avatars::AvatarsRepository;

/// Everything a use case may touch, injected per request.
pub trait Context: Sync + Send {
    type Db: Database;
    type Avatars: AvatarsRepository;

    fn db(&self) -> &Self::Db;
    fn avatars(&self) -> &Self::Avatars;
}
