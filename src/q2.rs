use crate::data::{Data, Kind};
use ahash::HashMap;
use polars::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindRating {
    pub kind: Kind,
    pub rating: String,
    pub count: u32,
}

/// Most common rating for each type. Equal counts go to the lexically
/// smaller rating; titles without a rating are not counted.
pub fn top_rating_per_type(db: &Data) -> Result<Vec<KindRating>, PolarsError> {
    let t = &db.t;

    let start = Instant::now();

    let counts: HashMap<(Kind, &str), u32> = t
        .kind
        .iter()
        .zip(t.rating.iter())
        .filter_map(|(kind, rating)| Some((*kind, rating.as_deref()?)))
        .fold(HashMap::default(), |mut acc, key| {
            *acc.entry(key).or_default() += 1;
            acc
        });

    let mut best: HashMap<Kind, (&str, u32)> = HashMap::default();
    for ((kind, rating), count) in counts {
        best.entry(kind)
            .and_modify(|(old_rating, old_count)| {
                if count > *old_count || (count == *old_count && rating < *old_rating) {
                    *old_rating = rating;
                    *old_count = count;
                }
            })
            .or_insert((rating, count));
    }

    let mut res: Vec<KindRating> = best
        .into_iter()
        .map(|(kind, (rating, count))| KindRating {
            kind,
            rating: rating.to_string(),
            count,
        })
        .collect();
    res.sort_by_key(|r| r.kind);

    debug!(query = "q2", elapsed = start.elapsed().as_secs_f32());

    Ok(res)
}

// SELECT type, rating
// FROM (
//     SELECT type, rating, COUNT(*),
//            RANK() OVER (PARTITION BY type ORDER BY COUNT(*) DESC) AS ranking
//     FROM netflix
//     GROUP BY 1, 2
// ) AS t1
// WHERE ranking = 1;

#[cfg(test)]
mod test_q2 {
    use super::*;
    use crate::data::fixture;

    #[test]
    fn test_q2() -> Result<(), PolarsError> {
        let db = fixture::data();
        let res = top_rating_per_type(&db)?;

        let expected = vec![
            KindRating { kind: Kind::Movie, rating: "TV-14".into(), count: 3 },
            KindRating { kind: Kind::TvShow, rating: "TV-MA".into(), count: 3 },
        ];

        assert_eq!(res, expected);
        Ok(())
    }

    #[test]
    fn tie_goes_to_smaller_rating() -> Result<(), PolarsError> {
        let df = df!(
            "show_id" => ["a", "b"],
            "type" => ["Movie", "Movie"],
            "title" => ["x", "y"],
            "director" => [None::<&str>, None],
            "casts" => [None::<&str>, None],
            "country" => [None::<&str>, None],
            "date_added" => [None::<&str>, None],
            "release_year" => [2000i32, 2001],
            "rating" => ["R", "PG"],
            "duration" => ["1 min", "2 min"],
            "listed_in" => ["Dramas", "Dramas"],
            "description" => ["x", "y"],
        )?;
        let db = Data::new(&crate::data::NetflixData::from_frame(df))?;
        let res = top_rating_per_type(&db)?;

        assert_eq!(res.len(), 1);
        assert_eq!(res[0].rating, "PG");
        Ok(())
    }
}
