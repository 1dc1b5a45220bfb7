use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use super::model::{CatalogTable, ContentType, RawTitle, Title, NOT_SPECIFIED, UNKNOWN_COUNTRY};
use super::DataError;

// ---------------------------------------------------------------------------
// Cleaning pipeline
// ---------------------------------------------------------------------------

/// Clean raw rows into an immutable [`CatalogTable`].
///
/// Steps run in order; later steps assume the earlier ones:
/// 1. deduplicate by full-row equality (first occurrence wins)
/// 2. fill `country` / `director` / `cast` sentinels
/// 3. parse `date_added`, failures become gaps
/// 4. fill date gaps with the column mode (ties → earliest date)
/// 5. drop rows whose `rating` or `duration` cell was blank
/// 6. build [`Title`]s, deriving `year_added` and the numeric duration
///
/// A duration cell that survives step 5 but contains no digits is kept with
/// `duration_value = None` rather than dropped.
pub fn clean(rows: Vec<RawTitle>) -> Result<CatalogTable, DataError> {
    let rows = dedup(rows);
    let rows = fill_sentinels(rows);

    let dates: Vec<Option<NaiveDate>> = rows.iter().map(|r| parse_date(&r.date_added)).collect();
    let mode = date_mode(&dates).ok_or(DataError::EmptyColumn("date_added"))?;

    let mut titles = Vec::with_capacity(rows.len());
    for (row_no, (row, date)) in rows.into_iter().zip(dates).enumerate() {
        if row.rating.trim().is_empty() || row.duration.trim().is_empty() {
            log::debug!("row {row_no}: dropped (blank rating or duration)");
            continue;
        }

        let kind = ContentType::parse(&row.kind).ok_or_else(|| DataError::UnknownContentType {
            row: row_no,
            value: row.kind.clone(),
        })?;

        let duration_value = leading_number(&row.duration);
        if duration_value.is_none() {
            log::debug!("row {row_no}: duration '{}' has no digits", row.duration);
        }

        titles.push(Title {
            show_id: row.show_id,
            kind,
            title: row.title,
            director: row.director,
            cast: row.cast,
            country: row.country,
            date_added: date.unwrap_or(mode),
            release_year: row.release_year.trim().parse().ok(),
            rating: row.rating,
            duration_value,
            duration_text: row.duration,
            listed_in: row.listed_in,
        });
    }

    Ok(CatalogTable { titles })
}

// ---------------------------------------------------------------------------
// Individual steps
// ---------------------------------------------------------------------------

/// Remove exact duplicate rows, keeping the first occurrence.
fn dedup(rows: Vec<RawTitle>) -> Vec<RawTitle> {
    let mut seen: HashSet<RawTitle> = HashSet::with_capacity(rows.len());
    rows.into_iter().filter(|r| seen.insert(r.clone())).collect()
}

/// Substitute the sentinel defaults for blank country / director / cast.
fn fill_sentinels(rows: Vec<RawTitle>) -> Vec<RawTitle> {
    rows.into_iter()
        .map(|mut r| {
            if r.country.trim().is_empty() {
                r.country = UNKNOWN_COUNTRY.to_string();
            }
            if r.director.trim().is_empty() {
                r.director = NOT_SPECIFIED.to_string();
            }
            if r.cast.trim().is_empty() {
                r.cast = NOT_SPECIFIED.to_string();
            }
            r
        })
        .collect()
}

/// Parse a `date_added` cell. The catalog export writes dates like
/// "September 25, 2021"; ISO dates are accepted as well.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%B %e, %Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}

/// Most frequent parsed date; ties are broken by the earliest date so the
/// fill is deterministic. `None` when no date parsed at all.
fn date_mode(dates: &[Option<NaiveDate>]) -> Option<NaiveDate> {
    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
    for d in dates.iter().flatten() {
        *counts.entry(*d).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by(|(da, ca), (db, cb)| ca.cmp(cb).then_with(|| db.cmp(da)))
        .map(|(d, _)| d)
}

/// Extract the leading run of digits from a duration cell: "90 min" → 90.0,
/// "2 Seasons" → 2.0. `None` when the text has no leading number.
pub fn leading_number(s: &str) -> Option<f64> {
    let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
