//! Sort configuration for document listings.
//!
//! The sort select emits combined `"field,direction"` tokens (e.g.
//! `"size,asc"`); [`SortOption`] parses and re-emits them. Comparison is
//! lexicographic on the raw string fields, sizes and dates included — that
//! is the ordering the backend's wire format implies, and callers depend on
//! it staying that way.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::Document;

// =============================================================================
// Sort keys and directions
// =============================================================================

/// Document field a listing can be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    DateAdded,
}

impl SortKey {
    /// Accessor for the field this key orders by.
    ///
    /// Fields deserialize to empty strings when absent, so a missing value
    /// compares as `""`.
    fn field<'a>(&self, doc: &'a Document) -> &'a str {
        match self {
            Self::Name => &doc.name,
            Self::Size => &doc.size,
            Self::DateAdded => &doc.date_added,
        }
    }

    fn token(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Size => "size",
            Self::DateAdded => "dateAdded",
        }
    }
}

/// Ordering direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    fn token(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

// =============================================================================
// SortOption
// =============================================================================

/// A field/direction pair, round-trippable with the select's option values.
///
/// Defaults to name-descending, the first entry of the sort select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortOption {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOption {
    /// Compare two documents under this option.
    ///
    /// Lexicographic on the selected field; the ascending result is reversed
    /// for descending order. Equal fields compare equal, which a stable sort
    /// turns into "keep input order".
    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        let ord = self.key.field(a).cmp(self.key.field(b));
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }

    /// Re-order a document sequence in place. `sort_by` is stable, so ties
    /// retain their relative input order.
    pub fn apply(&self, docs: &mut [Document]) {
        docs.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.key.token(), self.direction.token())
    }
}

/// An unrecognized sort token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortError(pub String);

impl fmt::Display for ParseSortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized sort option: {:?}", self.0)
    }
}

impl std::error::Error for ParseSortError {}

impl FromStr for SortOption {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSortError(s.to_string());
        let (key, direction) = s.split_once(',').ok_or_else(err)?;

        let key = match key {
            "name" => SortKey::Name,
            "size" => SortKey::Size,
            "dateAdded" => SortKey::DateAdded,
            _ => return Err(err()),
        };
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(err()),
        };

        Ok(Self { key, direction })
    }
}
