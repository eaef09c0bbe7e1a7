use crate::config::ReportConfig;
use crate::count::Count;
use crate::data::Data;
use crate::q1::KindCount;
use crate::q2::KindRating;
use crate::q6::YearShare;
use crate::q12::CategoryCount;
use crate::{q1, q2, q3, q4, q5, q6, q7, q8, q9, q10, q11, q12, q13, q14, q15};
use chrono::Datelike;
use polars::prelude::*;
use serde_json::{Value, json};
use std::fmt;
use std::time::Instant;
use tracing::info;

pub enum Body {
    Kinds(Vec<KindCount>),
    Ratings(Vec<KindRating>),
    Counts(Vec<Count>),
    Shares(Vec<YearShare>),
    Categories(Vec<CategoryCount>),
    Rows(DataFrame),
    Total(u32),
}

pub struct Section {
    pub title: String,
    pub body: Body,
}

impl Section {
    fn new(title: impl Into<String>, body: Body) -> Self {
        Section {
            title: title.into(),
            body,
        }
    }
}

/// Evaluate every report with the configured parameters, in order.
pub fn run(db: &Data, cfg: &ReportConfig) -> PolarsResult<Vec<Section>> {
    let start = Instant::now();

    let sections = vec![
        Section::new("Movies vs TV shows", Body::Kinds(q1::type_distribution(db)?)),
        Section::new(
            "Most common rating per type",
            Body::Ratings(q2::top_rating_per_type(db)?),
        ),
        Section::new("Titles per genre", Body::Counts(q3::genre_distribution(db)?)),
        Section::new(
            format!("Movies released in {}", cfg.release_year),
            Body::Rows(q4::movies_released_in(db, cfg.release_year)?),
        ),
        Section::new(
            format!("Added in the last {} years", cfg.recent_years),
            Body::Rows(q5::added_within_years(db, cfg.today, cfg.recent_years)?),
        ),
        Section::new(
            format!("Top {} years by share of {} titles", cfg.top_n, cfg.country),
            Body::Shares(q6::top_years_by_share(db, &cfg.country, cfg.top_n)?),
        ),
        Section::new(
            format!("Top {} countries", cfg.top_n),
            Body::Counts(q7::top_countries(db, cfg.top_n)?),
        ),
        Section::new("Longest movie", Body::Rows(q8::longest_movie(db)?)),
        Section::new(
            format!("TV shows with more than {} seasons", cfg.min_seasons),
            Body::Rows(q9::shows_with_more_seasons_than(db, cfg.min_seasons)?),
        ),
        Section::new("Documentaries", Body::Rows(q10::documentaries(db)?)),
        Section::new("Titles without a director", Body::Rows(q11::without_director(db)?)),
        Section::new(
            "Titles by description keywords",
            Body::Categories(q12::categorize_by_keywords(db)?),
        ),
        Section::new(
            format!("Titles directed by {}", cfg.director),
            Body::Rows(q13::directed_by(db, &cfg.director)?),
        ),
        Section::new(
            format!("Movies with {} in the last {} years", cfg.actor, cfg.actor_years),
            Body::Total(q14::actor_movie_count(
                db,
                &cfg.actor,
                cfg.today.year(),
                cfg.actor_years,
            )?),
        ),
        Section::new(
            format!("Top {} actors in {} movies", cfg.top_actors, cfg.country),
            Body::Counts(q15::top_actors_in_country(db, &cfg.country, cfg.top_actors)?),
        ),
    ];

    info!(
        sections = sections.len(),
        elapsed = start.elapsed().as_secs_f32(),
        "reports evaluated"
    );

    Ok(sections)
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        match &self.body {
            Body::Kinds(kinds) => {
                for k in kinds {
                    writeln!(f, "{}\t{}", k.kind, k.count)?;
                }
            }
            Body::Ratings(ratings) => {
                for r in ratings {
                    writeln!(f, "{}\t{}\t{}", r.kind, r.rating, r.count)?;
                }
            }
            Body::Counts(counts) => {
                for c in counts {
                    writeln!(f, "{}\t{}", c.name, c.count)?;
                }
            }
            Body::Shares(shares) => {
                for s in shares {
                    writeln!(f, "{}\t{}\t{:.2}%", s.release_year, s.count, s.percentage)?;
                }
            }
            Body::Categories(categories) => {
                for c in categories {
                    writeln!(f, "{}\t{}", c.category, c.count)?;
                }
            }
            Body::Rows(df) => writeln!(f, "{df}")?,
            Body::Total(total) => writeln!(f, "{total}")?,
        }
        Ok(())
    }
}

fn rows_to_json(df: &DataFrame) -> anyhow::Result<Value> {
    let mut df = df.clone();
    let mut buf = Vec::new();
    JsonWriter::new(&mut buf)
        .with_json_format(JsonFormat::Json)
        .finish(&mut df)?;
    Ok(serde_json::from_slice(&buf)?)
}

/// One JSON array of `{"title", "result"}` objects.
pub fn to_json(sections: &[Section]) -> anyhow::Result<Value> {
    let mut out = Vec::with_capacity(sections.len());
    for section in sections {
        let result = match &section.body {
            Body::Kinds(v) => serde_json::to_value(v)?,
            Body::Ratings(v) => serde_json::to_value(v)?,
            Body::Counts(v) => serde_json::to_value(v)?,
            Body::Shares(v) => serde_json::to_value(v)?,
            Body::Categories(v) => serde_json::to_value(v)?,
            Body::Rows(df) => rows_to_json(df)?,
            Body::Total(total) => json!(total),
        };
        out.push(json!({ "title": section.title, "result": result }));
    }
    Ok(Value::Array(out))
}

#[cfg(test)]
mod test_report {
    use super::*;
    use crate::data::fixture;
    use chrono::NaiveDate;

    fn config() -> ReportConfig {
        ReportConfig {
            today: NaiveDate::from_ymd_opt(2021, 10, 18).unwrap(),
            ..ReportConfig::default()
        }
    }

    #[test]
    fn runs_every_report() -> PolarsResult<()> {
        let db = fixture::data();
        let sections = run(&db, &config())?;

        assert_eq!(sections.len(), 15);
        assert!(matches!(sections[13].body, Body::Total(2)));
        let text = sections[0].to_string();
        assert!(text.starts_with("== Movies vs TV shows =="));
        assert!(text.contains("TV Show\t4"));
        Ok(())
    }

    #[test]
    fn renders_json() {
        let db = fixture::data();
        let sections = run(&db, &config()).unwrap();
        let json = to_json(&sections).unwrap();

        assert_eq!(json[0]["result"][0], json!({ "kind": "Movie", "count": 5 }));
        assert_eq!(json[11]["result"][0]["category"], "Bad");
        assert_eq!(json[7]["result"][0]["show_id"], "s4");
        assert_eq!(json[13]["result"], 2);
    }

    #[test]
    fn reports_are_idempotent() {
        let db = fixture::data();
        let first = to_json(&run(&db, &config()).unwrap()).unwrap();
        let second = to_json(&run(&db, &config()).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
