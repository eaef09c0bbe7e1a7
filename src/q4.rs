use crate::data::Data;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

pub fn movies_released_in(db: &Data, year: i32) -> Result<DataFrame, PolarsError> {
    let start = Instant::now();

    let res = db
        .titles
        .clone()
        .lazy()
        .filter(
            col("type")
                .eq(lit("Movie"))
                .and(col("release_year").cast(DataType::Int32).eq(lit(year))),
        )
        .collect()?;

    debug!(query = "q4", elapsed = start.elapsed().as_secs_f32(), rows = res.height());

    Ok(res)
}

// SELECT *
// FROM netflix
// WHERE type = 'Movie'
//   AND release_year = 2020;

#[cfg(test)]
mod test_q4 {
    use super::*;
    use crate::data::fixture;

    #[test]
    fn test_q4() -> Result<(), PolarsError> {
        let db = fixture::data();

        assert_eq!(fixture::ids(&movies_released_in(&db, 2020)?), vec!["s1", "s9"]);
        assert_eq!(fixture::ids(&movies_released_in(&db, 2015)?), vec!["s4", "s8"]);
        // TV shows from 2021 only
        assert_eq!(movies_released_in(&db, 2021)?.height(), 0);
        Ok(())
    }
}
