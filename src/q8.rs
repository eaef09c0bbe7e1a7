use crate::data::{Data, Kind};
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

/// The movie with the longest runtime, as a frame of at most one row.
/// Equal runtimes go to the lexically smallest `show_id`.
pub fn longest_movie(db: &Data) -> Result<DataFrame, PolarsError> {
    let t = &db.t;

    let start = Instant::now();

    let mut res: Option<(usize, u32)> = None;

    for (i, (kind, length)) in t.kind.iter().zip(t.length.iter()).enumerate() {
        if let (Kind::Movie, Some(length)) = (kind, length) {
            res = match res {
                Some((old, old_length))
                    if old_length > *length
                        || (old_length == *length && t.show_id[old] <= t.show_id[i]) =>
                {
                    Some((old, old_length))
                }
                _ => Some((i, *length)),
            };
        }
    }

    let mut mask = vec![false; t.len()];
    if let Some((i, _)) = res {
        mask[i] = true;
    }
    let res = db.rows(mask)?;

    debug!(query = "q8", elapsed = start.elapsed().as_secs_f32());

    Ok(res)
}

// SELECT *
// FROM netflix
// WHERE type = 'Movie'
// ORDER BY SPLIT_PART(duration, ' ', 1)::INT DESC
// LIMIT 1;
