pub mod beatmaps;
pub mod leaderboards;
pub mod modes;
pub mod mods;
pub mod profiles;
pub mod scores;
pub mod stats;
pub mod users;
