use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ShelfError;

/// Availability of a book. Older stores used Russian labels, which are still
/// accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "available", alias = "в наличии")]
    Available,
    #[serde(rename = "checked-out", alias = "выдана")]
    CheckedOut,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::CheckedOut => "checked-out",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "available" | "в наличии" => Ok(Status::Available),
            "checked-out" | "выдана" => Ok(Status::CheckedOut),
            other => Err(ShelfError::InvalidStatus(other.to_string())),
        }
    }
}

/// One catalog entry. Field order here is the key order in the store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: Status,
}

impl Book {
    pub fn new(id: u32, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status: Status::default(),
        }
    }

    /// Case-insensitive substring match on title or author, or exact match on year.
    pub fn matches(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        self.title.to_lowercase().contains(&query_lower)
            || self.author.to_lowercase().contains(&query_lower)
            || query == self.year.to_string()
    }
}
