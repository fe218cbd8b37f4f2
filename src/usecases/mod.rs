pub mod avatars;
pub mod leaderboards;
pub mod passwords;
pub mod profiles;
pub mod sessions;
