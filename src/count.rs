use ahash::HashMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub name: String,
    pub count: u32,
}

/// Occurrences per token, highest count first, ties by name ascending.
pub fn ranked<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Vec<Count> {
    let counts: HashMap<&str, u32> =
        tokens
            .into_iter()
            .fold(HashMap::default(), |mut acc, token| {
                *acc.entry(token).or_default() += 1;
                acc
            });

    let mut res: Vec<Count> = counts
        .into_iter()
        .map(|(name, count)| Count {
            name: name.to_string(),
            count,
        })
        .collect();
    res.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    res
}

/// First `n` of [`ranked`].
pub fn top_n<'a>(tokens: impl IntoIterator<Item = &'a str>, n: usize) -> Vec<Count> {
    let mut res = ranked(tokens);
    res.truncate(n);
    res
}

#[cfg(test)]
mod test_count {
    use super::*;

    #[test]
    fn ties_break_by_name() {
        let res = ranked(["b", "a", "c", "b", "a"]);
        let names: Vec<_> = res.iter().map(|c| (c.name.as_str(), c.count)).collect();
        assert_eq!(names, vec![("a", 2), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn top_n_truncates() {
        assert_eq!(top_n(["x", "y", "y"], 1).len(), 1);
        assert_eq!(top_n(["x", "y", "y"], 1)[0].name, "y");
        assert!(top_n(std::iter::empty(), 5).is_empty());
    }
}
