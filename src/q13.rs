use crate::data::Data;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Titles with `name` among their directors (exact, after trimming).
pub fn directed_by(db: &Data, name: &str) -> Result<DataFrame, PolarsError> {
    let t = &db.t;

    let start = Instant::now();

    let mask: Vec<bool> = t.directors.iter().map(|d| d.has(name)).collect();
    let res = db.rows(mask)?;

    debug!(query = "q13", elapsed = start.elapsed().as_secs_f32(), rows = res.height());

    Ok(res)
}

// SELECT *
// FROM (
//     SELECT *, UNNEST(STRING_TO_ARRAY(director, ',')) AS director_name
//     FROM netflix
// ) AS t
// WHERE director_name = 'Rajiv Chilaka';

#[cfg(test)]
mod test_q13 {
    use super::*;
    use crate::data::fixture;

    #[test]
    fn test_q13() -> Result<(), PolarsError> {
        let db = fixture::data();

        assert_eq!(fixture::ids(&directed_by(&db, "Rajiv Chilaka")?), vec!["s5", "s9"]);
        assert_eq!(fixture::ids(&directed_by(&db, "Kabir Khan")?), vec!["s4", "s9"]);
        assert_eq!(directed_by(&db, "Rajiv")?.height(), 0);
        Ok(())
    }
}
