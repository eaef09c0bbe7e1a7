use crate::count::{Count, top_n};
use crate::data::Data;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

pub fn top_countries(db: &Data, n: usize) -> Result<Vec<Count>, PolarsError> {
    let t = &db.t;

    let start = Instant::now();

    let res = top_n(t.countries.iter().flat_map(|countries| countries.iter()), n);

    debug!(query = "q7", elapsed = start.elapsed().as_secs_f32());

    Ok(res)
}

// SELECT UNNEST(STRING_TO_ARRAY(country, ',')) AS new_country,
//        COUNT(show_id) AS total_content
// FROM netflix
// GROUP BY 1
// ORDER BY 2 DESC
// LIMIT 5;
