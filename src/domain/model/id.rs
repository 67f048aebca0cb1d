use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Book identifier. Assigned from the catalog size at insertion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BookId(u64);

impl BookId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// The id a record receives when the store currently holds `count` records.
    pub fn from_count(count: usize) -> Self {
        Self(count as u64)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid book id: {0:?}")]
pub struct ParseBookIdError(String);

impl FromStr for BookId {
    type Err = ParseBookIdError;

    /// Only the canonical decimal spelling is accepted, so `"1"` and `"01"`
    /// never name the same book.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s.parse().map_err(|_| ParseBookIdError(s.to_string()))?;
        if value.to_string() != s {
            return Err(ParseBookIdError(s.to_string()));
        }
        Ok(Self(value))
    }
}
