use crate::data::{Data, Kind};
use ahash::HashMap;
use polars::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindCount {
    pub kind: Kind,
    pub count: u32,
}

pub fn type_distribution(db: &Data) -> Result<Vec<KindCount>, PolarsError> {
    let t = &db.t;

    let start = Instant::now();

    let counts: HashMap<Kind, u32> = t.kind.iter().fold(HashMap::default(), |mut acc, kind| {
        *acc.entry(*kind).or_default() += 1;
        acc
    });

    let mut res: Vec<KindCount> = counts
        .into_iter()
        .map(|(kind, count)| KindCount { kind, count })
        .collect();
    res.sort_by_key(|c| c.kind);

    debug!(query = "q1", elapsed = start.elapsed().as_secs_f32());

    Ok(res)
}

// SELECT type, COUNT(*) AS total_content
// FROM netflix
// GROUP BY type;
