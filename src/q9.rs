use crate::data::{Data, Kind};
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

pub fn shows_with_more_seasons_than(db: &Data, k: u32) -> Result<DataFrame, PolarsError> {
    let t = &db.t;

    let start = Instant::now();

    let mask: Vec<bool> = t
        .kind
        .iter()
        .zip(t.length.iter())
        .map(|(kind, seasons)| *kind == Kind::TvShow && seasons.is_some_and(|s| s > k))
        .collect();
    let res = db.rows(mask)?;

    debug!(query = "q9", elapsed = start.elapsed().as_secs_f32(), rows = res.height());

    Ok(res)
}

// SELECT *
// FROM netflix
// WHERE type = 'TV Show'
//   AND SPLIT_PART(duration, ' ', 1)::INT > 5;
