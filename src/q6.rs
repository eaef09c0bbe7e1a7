use crate::data::Data;
use ahash::HashMap;
use memchr::memmem::Finder;
use polars::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearShare {
    pub release_year: i32,
    pub count: u32,
    /// Share of the country's titles, in percent, rounded to 2 decimals.
    /// The rounded values can miss 100 by up to 0.005 per year; `count`
    /// over all years always sums to the country total exactly.
    pub percentage: f64,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Per-year share of the titles from `country`, largest share first and
/// equal shares by most recent year. A title belongs to the country when any
/// of its country tokens contains `country`. Titles without a release year
/// are ignored.
pub fn year_shares(db: &Data, country: &str) -> Result<Vec<YearShare>, PolarsError> {
    let t = &db.t;
    let needle = Finder::new(country);

    let start = Instant::now();

    let per_year: HashMap<i32, u32> = t
        .countries
        .iter()
        .zip(t.release_year.iter())
        .filter_map(|(countries, year)| {
            countries.any_contains(&needle).then_some(*year).flatten()
        })
        .fold(HashMap::default(), |mut acc, year| {
            *acc.entry(year).or_default() += 1;
            acc
        });

    let total: u32 = per_year.values().sum();
    if total == 0 {
        return Ok(Vec::new());
    }

    let mut res: Vec<YearShare> = per_year
        .into_iter()
        .map(|(release_year, count)| YearShare {
            release_year,
            count,
            percentage: round2(100.0 * f64::from(count) / f64::from(total)),
        })
        .collect();
    res.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| b.release_year.cmp(&a.release_year))
    });

    debug!(query = "q6", elapsed = start.elapsed().as_secs_f32(), years = res.len());

    Ok(res)
}

pub fn top_years_by_share(db: &Data, country: &str, n: usize) -> Result<Vec<YearShare>, PolarsError> {
    let mut res = year_shares(db, country)?;
    res.truncate(n);
    Ok(res)
}

// SELECT release_year,
//        COUNT(show_id) AS total_release,
//        ROUND(COUNT(show_id)::numeric /
//              (SELECT COUNT(show_id) FROM netflix WHERE country = 'India')::numeric * 100, 2)
//            AS avg_release
// FROM netflix
// WHERE country = 'India'
// GROUP BY country, release_year
// ORDER BY avg_release DESC
// LIMIT 5;
