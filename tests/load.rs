use chrono::NaiveDate;
use nfr::data::{Data, Kind, NetflixData};
use nfr::{q1, q5, q7, q8, q11};
use polars::prelude::*;

fn load() -> Data {
    let netflix = NetflixData::load("tests/data/titles.csv").unwrap();
    Data::new(&netflix).unwrap()
}

fn ids(df: &DataFrame) -> Vec<String> {
    df.column("show_id")
        .unwrap()
        .str()
        .unwrap()
        .into_no_null_iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn reads_csv_with_cast_header() {
    let db = load();
    let t = &db.t;

    assert_eq!(t.len(), 6);
    assert_eq!(t.kind[1], Kind::TvShow);
    assert_eq!(t.release_year[3], Some(2016));
    assert_eq!(t.cast_members[3].iter().collect::<Vec<_>>(), vec!["Salman Khan", "Anushka Sharma"]);
    assert_eq!(t.countries[2].iter().collect::<Vec<_>>(), vec!["India", "France"]);
    assert_eq!(t.added[3], NaiveDate::from_ymd_opt(2018, 4, 2));
    assert_eq!(t.added[5], None);
    assert_eq!(t.length[5], None);
    assert!(t.countries[5].is_empty());
}

#[test]
fn reports_over_loaded_csv() -> PolarsResult<()> {
    let db = load();

    let kinds: Vec<(Kind, u32)> = q1::type_distribution(&db)?
        .into_iter()
        .map(|k| (k.kind, k.count))
        .collect();
    assert_eq!(kinds, vec![(Kind::Movie, 4), (Kind::TvShow, 2)]);

    let countries: Vec<(String, u32)> = q7::top_countries(&db, 2)?
        .into_iter()
        .map(|c| (c.name, c.count))
        .collect();
    assert_eq!(
        countries,
        vec![("India".to_string(), 2), ("United States".to_string(), 2)]
    );

    assert_eq!(ids(&q8::longest_movie(&db)?), vec!["s4"]);
    assert_eq!(ids(&q11::without_director(&db)?), vec!["s2", "s5", "s6"]);

    let cutoff = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
    assert_eq!(ids(&q5::added_since(&db, cutoff)?), vec!["s1", "s2", "s4", "s5"]);
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    assert!(NetflixData::load("tests/data/missing.csv").is_err());
}
