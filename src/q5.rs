use crate::data::Data;
use chrono::{Months, NaiveDate};
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Titles added on or after `cutoff`. Titles whose `date_added` is missing
/// or unparseable are left out.
pub fn added_since(db: &Data, cutoff: NaiveDate) -> Result<DataFrame, PolarsError> {
    let t = &db.t;

    let start = Instant::now();

    let mask: Vec<bool> = t
        .added
        .iter()
        .map(|added| added.is_some_and(|date| date >= cutoff))
        .collect();
    let res = db.rows(mask)?;

    debug!(query = "q5", elapsed = start.elapsed().as_secs_f32(), rows = res.height());

    Ok(res)
}

/// Titles added within the last `years` years of `today`.
pub fn added_within_years(db: &Data, today: NaiveDate, years: u32) -> Result<DataFrame, PolarsError> {
    let cutoff = today
        .checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN);
    added_since(db, cutoff)
}

// SELECT *
// FROM netflix
// WHERE TO_DATE(date_added, 'Month DD, YYYY') >= CURRENT_DATE - INTERVAL '5 years';

#[cfg(test)]
mod test_q5 {
    use super::*;
    use crate::data::fixture;

    #[test]
    fn test_q5() -> Result<(), PolarsError> {
        let db = fixture::data();

        let cutoff = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert_eq!(fixture::ids(&added_since(&db, cutoff)?), vec!["s1", "s2", "s3", "s7"]);

        // inclusive
        let cutoff = NaiveDate::from_ymd_opt(2021, 9, 25).unwrap();
        assert_eq!(fixture::ids(&added_since(&db, cutoff)?), vec!["s1"]);
        Ok(())
    }

    #[test]
    fn window_from_today() -> Result<(), PolarsError> {
        let db = fixture::data();
        let today = NaiveDate::from_ymd_opt(2021, 10, 18).unwrap();

        // s5 has no date, s8 an unparseable one
        assert_eq!(
            fixture::ids(&added_within_years(&db, today, 5)?),
            vec!["s1", "s2", "s3", "s4", "s6", "s7", "s9"]
        );
        assert_eq!(
            fixture::ids(&added_within_years(&db, today, 1)?),
            vec!["s1", "s2", "s3", "s7"]
        );
        assert_eq!(added_within_years(&db, today, 0)?.height(), 0);
        Ok(())
    }
}
