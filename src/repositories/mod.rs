use crate::repositories::scores::ScoresRepository;
use crate::repositories::stats::StatsRepository;
use crate::repositories::users::UsersRepository;

pub mod avatars;
pub mod scores;
pub mod stats;
pub mod users;

/// The relational store as seen by the use cases.
pub trait Database: UsersRepository + StatsRepository + ScoresRepository {}

impl<T: UsersRepository + StatsRepository + ScoresRepository> Database for T {}
