use crate::data::Data;
use memchr::memmem::Finder;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

pub fn documentaries(db: &Data) -> Result<DataFrame, PolarsError> {
    let t = &db.t;

    let documentaries = Finder::new("Documentaries");

    let start = Instant::now();

    let mask: Vec<bool> = t
        .listed_in
        .iter()
        .map(|listed_in| {
            listed_in
                .as_deref()
                .is_some_and(|l| documentaries.find(l.as_bytes()).is_some())
        })
        .collect();
    let res = db.rows(mask)?;

    debug!(query = "q10", elapsed = start.elapsed().as_secs_f32(), rows = res.height());

    Ok(res)
}

// SELECT *
// FROM netflix
// WHERE listed_in LIKE '%Documentaries%';
