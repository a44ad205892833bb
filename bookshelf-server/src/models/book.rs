//! Book record and create payload

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Storage-assigned book identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl BookId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Book row from the `books` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub author: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
}

impl Book {
    pub fn book_id(&self) -> BookId {
        BookId(self.id)
    }
}

/// Create request body.
///
/// An `id` in the payload is ignored; storage assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewBook {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
}

impl NewBook {
    /// Attach a storage-assigned id.
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id: id.get(),
            author: self.author,
            title: self.title,
            publisher: self.publisher,
        }
    }
}
