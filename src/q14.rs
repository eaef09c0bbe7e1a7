use crate::data::{Data, Kind};
use memchr::memmem::Finder;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Movies released in the last `years` years whose cast mentions `actor`.
pub fn actor_movie_count(
    db: &Data,
    actor: &str,
    current_year: i32,
    years: u32,
) -> Result<u32, PolarsError> {
    let t = &db.t;

    let actor = Finder::new(actor);
    let since = current_year.saturating_sub_unsigned(years);

    let start = Instant::now();

    let res = t
        .kind
        .iter()
        .zip(t.casts.iter())
        .zip(t.release_year.iter())
        .filter(|((kind, casts), year)| {
            **kind == Kind::Movie
                && year.is_some_and(|y| y >= since)
                && casts
                    .as_deref()
                    .is_some_and(|c| actor.find(c.as_bytes()).is_some())
        })
        .count() as u32;

    debug!(query = "q14", elapsed = start.elapsed().as_secs_f32());

    Ok(res)
}

// SELECT COUNT(*)
// FROM netflix
// WHERE type = 'Movie'
//   AND casts LIKE '%Salman Khan%'
//   AND release_year >= EXTRACT(YEAR FROM CURRENT_DATE) - 10;

#[cfg(test)]
mod test_q14 {
    use super::*;
    use crate::data::fixture;

    #[test]
    fn test_q14() -> Result<(), PolarsError> {
        let db = fixture::data();

        assert_eq!(actor_movie_count(&db, "Salman Khan", 2021, 10)?, 2);
        assert_eq!(actor_movie_count(&db, "Salman Khan", 2021, 5)?, 0);
        assert_eq!(actor_movie_count(&db, "Salman Khan", 2021, 6)?, 2);
        // TV shows are not counted
        assert_eq!(actor_movie_count(&db, "Claire Foy", 2021, 10)?, 0);
        Ok(())
    }
}
