use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// ContentType – the catalog's two kinds of entry
// ---------------------------------------------------------------------------

/// Kind of catalog entry, as spelled in the CSV `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentType {
    Movie,
    TvShow,
}

impl ContentType {
    /// Parse the CSV spelling ("Movie" / "TV Show").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Movie" => Some(ContentType::Movie),
            "TV Show" => Some(ContentType::TvShow),
            _ => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Movie => write!(f, "Movie"),
            ContentType::TvShow => write!(f, "TV Show"),
        }
    }
}

// ---------------------------------------------------------------------------
// RawTitle – one row of the source CSV, before cleaning
// ---------------------------------------------------------------------------

/// One raw CSV row. All fields are kept as text; an empty string means the
/// cell was blank. Full-row equality drives deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct RawTitle {
    #[serde(default)]
    pub show_id: String,
    /// The `type` column: "Movie" or "TV Show".
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub date_added: String,
    #[serde(default)]
    pub release_year: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub listed_in: String,
}

// ---------------------------------------------------------------------------
// Title – one cleaned row
// ---------------------------------------------------------------------------

/// Sentinel for a missing country.
pub const UNKNOWN_COUNTRY: &str = "Unknown";
/// Sentinel for a missing director or cast list.
pub const NOT_SPECIFIED: &str = "Not Specified";

/// A cleaned catalog entry. `country`, `director` and `cast` are never
/// blank (sentinels substituted), `rating` is non-empty, and `date_added`
/// has been parsed or mode-filled. `duration_value` is the leading number
/// extracted from the duration text ("90 min" → 90.0, "2 Seasons" → 2.0);
/// it is `None` only when that text carried no digits at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub show_id: String,
    pub kind: ContentType,
    pub title: String,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: NaiveDate,
    pub release_year: Option<i32>,
    pub rating: String,
    pub duration_value: Option<f64>,
    /// Original duration text, kept for the unit ("min" vs "Seasons").
    pub duration_text: String,
    pub listed_in: String,
}

impl Title {
    /// Year the entry was added to the catalog.
    pub fn year_added(&self) -> i32 {
        self.date_added.year()
    }

    /// Countries listed for this entry, in CSV order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        split_multi(&self.country)
    }

    /// Genres (`listed_in`) for this entry, in CSV order.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        split_multi(&self.listed_in)
    }
}

/// Split a comma-separated multi-value cell ("United States, India") into
/// its entries, skipping blanks.
pub fn split_multi(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|t| !t.is_empty())
}

// ---------------------------------------------------------------------------
// CatalogTable – the cleaned dataset
// ---------------------------------------------------------------------------

/// The full cleaned dataset. Built once by the cleaning pipeline and never
/// mutated afterwards; every aggregation is a read-only pass over `titles`.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTable {
    pub titles: Vec<Title>,
}

impl CatalogTable {
    /// Number of cleaned entries.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_parses_csv_spellings() {
        assert_eq!(ContentType::parse("Movie"), Some(ContentType::Movie));
        assert_eq!(ContentType::parse("TV Show"), Some(ContentType::TvShow));
        assert_eq!(ContentType::parse(" TV Show "), Some(ContentType::TvShow));
        assert_eq!(ContentType::parse("Documentary"), None);
    }

    #[test]
    fn split_multi_trims_and_skips_blanks() {
        let parts: Vec<&str> = split_multi("United States, India, ").collect();
        assert_eq!(parts, vec!["United States", "India"]);
        assert_eq!(split_multi("").count(), 0);
    }
}
