use crate::common::context::Context;
use crate::common::error::{ServiceResult, storage};
use crate::models::leaderboards::RankedEntry;
use crate::models::modes::Mode;
use crate::repositories::stats::StatsRepository;

pub const DEFAULT_LIMIT: u32 = 50;

/// Ranked players of `mode` by pp, numbered from 1.
///
/// `mode` outside the known modes yields an empty leaderboard. Players with
/// equal pp keep the order the store returns them in.
pub async fn fetch<C: Context>(ctx: &C, mode: i32, limit: u32) -> ServiceResult<Vec<RankedEntry>> {
    let Ok(mode) = Mode::try_from(mode) else {
        return Ok(Vec::new());
    };
    if limit == 0 {
        return Ok(Vec::new());
    }

    let rows = match ctx.db().fetch_leaderboard(mode, limit).await {
        Ok(rows) => rows,
        Err(e) => return storage(e),
    };
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| RankedEntry::from_row(index + 1, row))
        .collect()
}
