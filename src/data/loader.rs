use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::RawTitle;
use super::DataError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Header columns the cleaning pipeline depends on. Extra columns in the
/// input are ignored.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "type",
    "title",
    "director",
    "cast",
    "country",
    "date_added",
    "release_year",
    "rating",
    "duration",
    "listed_in",
];

/// Load raw catalog rows from a CSV file.
///
/// Expected layout: header row with at least the [`REQUIRED_COLUMNS`];
/// blank cells are kept as empty strings for the cleaner to deal with.
pub fn load_csv(path: &Path) -> Result<Vec<RawTitle>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_titles(file).with_context(|| format!("reading {}", path.display()))
}

/// Parse raw rows from any CSV reader. Split out from [`load_csv`] so tests
/// can feed in-memory data.
pub fn read_titles<R: Read>(rdr: R) -> Result<Vec<RawTitle>, DataError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);

    let headers = reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DataError::MissingColumn(col.to_string()));
        }
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: RawTitle = record.deserialize(Some(&headers))?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in";

    #[test]
    fn reads_rows_and_keeps_blanks_as_empty_strings() {
        let csv = format!(
            "{HEADER}\n\
             s1,Movie,Dust,,,United States,\"September 25, 2021\",2020,PG-13,90 min,Dramas\n"
        );
        let rows = read_titles(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, "Movie");
        assert_eq!(rows[0].title, "Dust");
        assert_eq!(rows[0].director, "");
        assert_eq!(rows[0].country, "United States");
        assert_eq!(rows[0].duration, "90 min");
    }

    #[test]
    fn rejects_missing_required_column() {
        // No `rating` column.
        let csv = "show_id,type,title,director,cast,country,date_added,release_year,duration,listed_in\n";
        let err = read_titles(csv.as_bytes()).unwrap_err();
        match err {
            DataError::MissingColumn(col) => assert_eq!(col, "rating"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ignores_extra_columns() {
        let csv = format!(
            "{HEADER},description\n\
             s1,TV Show,Signal,,,Korea,\"July 1, 2020\",2016,TV-14,1 Season,Thrillers,a cop drama\n"
        );
        let rows = read_titles(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].duration, "1 Season");
    }
}
