use crate::count::{Count, top_n};
use crate::data::{Data, Kind};
use memchr::memmem::Finder;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Actors appearing in the most movies from `country`.
pub fn top_actors_in_country(db: &Data, country: &str, n: usize) -> Result<Vec<Count>, PolarsError> {
    let t = &db.t;

    let country = Finder::new(country);

    let start = Instant::now();

    let actors = t
        .kind
        .iter()
        .zip(t.country.iter())
        .zip(t.cast_members.iter())
        .filter(|((kind, c), _)| {
            **kind == Kind::Movie
                && c.as_deref()
                    .is_some_and(|c| country.find(c.as_bytes()).is_some())
        })
        .flat_map(|(_, cast)| cast.iter());
    let res = top_n(actors, n);

    debug!(query = "q15", elapsed = start.elapsed().as_secs_f32());

    Ok(res)
}

// SELECT UNNEST(STRING_TO_ARRAY(casts, ',')) AS actor,
//        COUNT(*)
// FROM netflix
// WHERE type = 'Movie'
//   AND country LIKE '%India%'
// GROUP BY 1
// ORDER BY 2 DESC
// LIMIT 10;

#[cfg(test)]
mod test_q15 {
    use super::*;
    use crate::data::fixture;

    #[test]
    fn test_q15() -> Result<(), PolarsError> {
        let db = fixture::data();
        let res = top_actors_in_country(&db, "India", 3)?;

        let res: Vec<(&str, u32)> = res.iter().map(|c| (c.name.as_str(), c.count)).collect();
        let expected = vec![("Salman Khan", 2), ("Anushka Sharma", 1), ("Julie Tejwani", 1)];

        assert_eq!(res, expected);
        assert_eq!(top_actors_in_country(&db, "India", 10)?.len(), 6);
        assert!(top_actors_in_country(&db, "South Africa", 10)?.is_empty());
        Ok(())
    }
}
