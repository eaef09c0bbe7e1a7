use crate::parse::{parse_date_added, parse_duration};
use crate::tokens::Tokens;
use ahash::HashSet;
use chrono::NaiveDate;
use polars::prelude::*;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

/// Raw titles table as read from disk.
pub struct NetflixData {
    pub titles: DataFrame,
}

// CREATE TABLE netflix (
//     show_id      varchar(10) PRIMARY KEY,
//     type         varchar(10),
//     title        varchar(150),
//     director     varchar(208),
//     casts        varchar(1000),
//     country      varchar(150),
//     date_added   varchar(50),
//     release_year int,
//     rating       varchar(10),
//     duration     varchar(15),
//     listed_in    varchar(100),
//     description  varchar(250)
// );

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Kind {
    #[serde(rename = "Movie")]
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
}

impl Kind {
    pub fn parse(raw: &str) -> Option<Kind> {
        match raw {
            "Movie" => Some(Kind::Movie),
            "TV Show" => Some(Kind::TvShow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Movie => "Movie",
            Kind::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Columnar view of the titles table. Blank strings are stored as `None`.
pub struct T {
    pub show_id: Vec<String>,
    pub kind: Vec<Kind>,
    pub title: Vec<Option<String>>,
    pub director: Vec<Option<String>>,
    pub casts: Vec<Option<String>>,
    pub country: Vec<Option<String>>,
    pub date_added: Vec<Option<String>>,
    pub release_year: Vec<Option<i32>>,
    pub rating: Vec<Option<String>>,
    pub duration: Vec<Option<String>>,
    pub listed_in: Vec<Option<String>>,
    pub description: Vec<Option<String>>,

    // parsed once at load
    pub directors: Vec<Tokens>,
    pub cast_members: Vec<Tokens>,
    pub countries: Vec<Tokens>,
    pub genres: Vec<Tokens>,
    pub added: Vec<Option<NaiveDate>>,
    pub length: Vec<Option<u32>>,
}

impl T {
    pub fn len(&self) -> usize {
        self.show_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.show_id.is_empty()
    }
}

pub struct Data {
    pub titles: DataFrame,
    pub t: T,
}

impl NetflixData {
    /// Read a `.csv` (with header) or `.parquet` titles file.
    pub fn load(path: impl AsRef<Path>) -> PolarsResult<Self> {
        let path = path.as_ref();
        let titles = match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => CsvReadOptions::default()
                .with_has_header(true)
                .with_infer_schema_length(None)
                .try_into_reader_with_file_path(Some(path.to_path_buf()))?
                .finish()?,
            Some("parquet") => ParquetReader::new(std::fs::File::open(path)?).finish()?,
            _ => {
                return Err(PolarsError::InvalidOperation(
                    format!("unsupported dataset file: {}", path.display()).into(),
                ));
            }
        };
        info!(path = %path.display(), rows = titles.height(), "read titles");
        Ok(NetflixData { titles })
    }

    pub fn from_frame(titles: DataFrame) -> Self {
        NetflixData { titles }
    }
}

fn str_column(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    Ok(column
        .str()?
        .into_iter()
        .map(|opt| opt.filter(|s| !s.trim().is_empty()).map(|s| s.to_string()))
        .collect())
}

impl Data {
    pub fn new(netflix: &NetflixData) -> PolarsResult<Self> {
        let df = &netflix.titles;

        let show_id = str_column(df, "show_id")?
            .into_iter()
            .enumerate()
            .map(|(row, id)| {
                id.ok_or_else(|| {
                    PolarsError::ComputeError(format!("row {row}: missing show_id").into())
                })
            })
            .collect::<PolarsResult<Vec<String>>>()?;

        let mut seen: HashSet<&str> = HashSet::default();
        for id in &show_id {
            if !seen.insert(id.as_str()) {
                return Err(PolarsError::ComputeError(
                    format!("duplicate show_id {id:?}").into(),
                ));
            }
        }

        let kind = str_column(df, "type")?
            .into_iter()
            .zip(show_id.iter())
            .map(|(raw, id)| {
                raw.as_deref().and_then(Kind::parse).ok_or_else(|| {
                    PolarsError::ComputeError(
                        format!("{id}: type must be \"Movie\" or \"TV Show\", got {raw:?}").into(),
                    )
                })
            })
            .collect::<PolarsResult<Vec<Kind>>>()?;

        let casts_name = if df.get_column_index("casts").is_some() {
            "casts"
        } else {
            "cast"
        };

        let release_year = df.column("release_year")?.cast(&DataType::Int32)?;
        let release_year: Vec<Option<i32>> = release_year.i32()?.into_iter().collect();

        let director = str_column(df, "director")?;
        let casts = str_column(df, casts_name)?;
        let country = str_column(df, "country")?;
        let date_added = str_column(df, "date_added")?;
        let duration = str_column(df, "duration")?;
        let listed_in = str_column(df, "listed_in")?;

        let directors = director.iter().map(|d| Tokens::parse(d.as_deref())).collect();
        let cast_members = casts.iter().map(|c| Tokens::parse(c.as_deref())).collect();
        let countries = country.iter().map(|c| Tokens::parse(c.as_deref())).collect();
        let genres = listed_in.iter().map(|l| Tokens::parse(l.as_deref())).collect();

        let added = date_added
            .iter()
            .map(|d| d.as_deref().and_then(parse_date_added))
            .collect();

        let length = duration
            .iter()
            .zip(show_id.iter())
            .map(|(d, id)| {
                let d = d.as_deref()?;
                let parsed = parse_duration(d);
                if parsed.is_none() {
                    warn!(show_id = %id, duration = d, "unparseable duration");
                }
                parsed
            })
            .collect();

        let t = T {
            title: str_column(df, "title")?,
            rating: str_column(df, "rating")?,
            description: str_column(df, "description")?,
            show_id,
            kind,
            director,
            casts,
            country,
            date_added,
            release_year,
            duration,
            listed_in,
            directors,
            cast_members,
            countries,
            genres,
            added,
            length,
        };

        info!(titles = t.len(), "built columnar view");

        Ok(Data {
            titles: df.clone(),
            t,
        })
    }

    /// Rows of the original frame selected by a per-row mask.
    pub fn rows(&self, mask: Vec<bool>) -> PolarsResult<DataFrame> {
        let mask = BooleanChunked::from_slice("mask".into(), &mask);
        self.titles.filter(&mask)
    }
}
