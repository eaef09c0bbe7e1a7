use crate::count::{Count, ranked};
use crate::data::Data;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Titles per genre. A title counts once towards each genre it lists.
pub fn genre_distribution(db: &Data) -> Result<Vec<Count>, PolarsError> {
    let t = &db.t;

    let start = Instant::now();

    let res = ranked(t.genres.iter().flat_map(|genres| genres.iter()));

    debug!(query = "q3", elapsed = start.elapsed().as_secs_f32(), genres = res.len());

    Ok(res)
}

// SELECT UNNEST(STRING_TO_ARRAY(listed_in, ',')) AS genre,
//        COUNT(show_id) AS total_content
// FROM netflix
// GROUP BY 1;
