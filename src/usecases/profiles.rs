use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, storage};
use crate::models::modes::Mode;
use crate::models::profiles::Profile;
use crate::models::scores::BestScore;
use crate::models::stats::Stats;
use crate::models::users::User;
use crate::repositories::scores::ScoresRepository;
use crate::repositories::stats::StatsRepository;
use crate::repositories::users::UsersRepository;

pub const BEST_SCORES_LIMIT: u32 = 10;

pub async fn fetch<C: Context>(ctx: &C, user_id: i32, requested_mode: i32) -> ServiceResult<Profile> {
    let user = match ctx.db().fetch_user(user_id).await {
        Ok(user) => User::from(user),
        Err(sqlx::Error::RowNotFound) => return Err(AppError::UsersNotFound),
        Err(e) => return storage(e),
    };

    // nothing can be stored under an unknown mode
    let Ok(mode) = Mode::try_from(requested_mode) else {
        return Ok(Profile {
            user,
            stats: Stats::empty(user_id, requested_mode),
            best_scores: vec![],
        });
    };

    // players without plays in this mode still get a profile
    let stats = match ctx.db().fetch_stats(user_id, mode).await {
        Ok(Some(stats)) => Stats::try_from(stats)?,
        Ok(None) => Stats::empty(user_id, requested_mode),
        Err(e) => return storage(e),
    };

    let best_scores = match ctx
        .db()
        .fetch_best_scores(user_id, mode, BEST_SCORES_LIMIT)
        .await
    {
        Ok(rows) => rows
            .into_iter()
            .map(BestScore::try_from)
            .collect::<ServiceResult<Vec<_>>>()?,
        Err(e) => return storage(e),
    };

    Ok(Profile {
        user,
        stats,
        best_scores,
    })
}
