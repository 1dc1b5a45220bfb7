/// Data layer: core types, loading, and cleaning.
///
/// Architecture:
/// ```text
///   titles .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<RawTitle>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  dedup, fill, mode-fill dates, drop, derive
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ CatalogTable  │  immutable Vec<Title>
///   └──────────────┘
/// ```
pub mod clean;
pub mod loader;
pub mod model;

use thiserror::Error;

/// Fatal problems with the input data. Per-row issues (an unparseable date,
/// a duration with no digits) are absorbed by the cleaning pipeline and
/// never reach this type.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed input: {0}")]
    Malformed(#[from] csv::Error),

    #[error("required column '{0}' is missing from the header")]
    MissingColumn(String),

    #[error("row {row}: unrecognised content type '{value}'")]
    UnknownContentType { row: usize, value: String },

    #[error("column '{0}' has no usable values")]
    EmptyColumn(&'static str),
}
