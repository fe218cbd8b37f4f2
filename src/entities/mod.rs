pub mod beatmaps;
pub mod scores;
pub mod stats;
pub mod users;
