use crate::data::Data;
use memchr::memmem;
use polars::prelude::*;
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Bad,
    Good,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Bad => f.write_str("Bad"),
            Category::Good => f.write_str("Good"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: u32,
}

/// "Bad" when the description mentions "kill" or "violence" (case-sensitive).
pub fn classify(description: &str) -> Category {
    let bytes = description.as_bytes();
    if memmem::find(bytes, b"kill").is_some() || memmem::find(bytes, b"violence").is_some() {
        Category::Bad
    } else {
        Category::Good
    }
}

pub fn categorize_by_keywords(db: &Data) -> Result<Vec<CategoryCount>, PolarsError> {
    let t = &db.t;

    let start = Instant::now();

    let (mut bad, mut good) = (0u32, 0u32);
    for description in &t.description {
        match classify(description.as_deref().unwrap_or_default()) {
            Category::Bad => bad += 1,
            Category::Good => good += 1,
        }
    }

    let res: Vec<CategoryCount> = [(Category::Bad, bad), (Category::Good, good)]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(category, count)| CategoryCount { category, count })
        .collect();

    debug!(query = "q12", elapsed = start.elapsed().as_secs_f32());

    Ok(res)
}

// SELECT category, COUNT(*) AS content_count
// FROM (
//     SELECT CASE
//                WHEN description LIKE '%kill%' OR description LIKE '%violence%' THEN 'Bad'
//                ELSE 'Good'
//            END AS category
//     FROM netflix
// ) AS categorized_content
// GROUP BY category;
