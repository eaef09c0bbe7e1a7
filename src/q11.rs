use crate::data::Data;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Titles whose director is null or blank.
pub fn without_director(db: &Data) -> Result<DataFrame, PolarsError> {
    let t = &db.t;

    let start = Instant::now();

    let mask: Vec<bool> = t.director.iter().map(Option::is_none).collect();
    let res = db.rows(mask)?;

    debug!(query = "q11", elapsed = start.elapsed().as_secs_f32(), rows = res.height());

    Ok(res)
}

// SELECT *
// FROM netflix
// WHERE director IS NULL;
