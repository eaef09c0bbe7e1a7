use memchr::memmem::Finder;
use serde::Serialize;

/// A comma-separated field split once at load time.
///
/// Every token is trimmed and empty tokens are dropped, so a null or blank
/// field yields no tokens at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tokens(Vec<String>);

impl Tokens {
    pub fn parse(field: Option<&str>) -> Self {
        match field {
            Some(field) => Tokens(
                field
                    .split(',')
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            None => Tokens::default(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact match against a single token.
    pub fn has(&self, token: &str) -> bool {
        self.iter().any(|t| t == token)
    }

    /// True if any token contains the needle as a literal substring.
    pub fn any_contains(&self, needle: &Finder) -> bool {
        self.iter().any(|t| needle.find(t.as_bytes()).is_some())
    }
}
