use std::collections::HashMap;

use crate::data::model::{CatalogTable, ContentType, Title, NOT_SPECIFIED};

// ---------------------------------------------------------------------------
// AggregateSeries – label → count, in a meaningful order
// ---------------------------------------------------------------------------

/// An ordered label → count mapping, one per chart. Ephemeral: built fresh
/// per call and handed straight to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateSeries {
    pub entries: Vec<(String, u64)>,
}

impl AggregateSeries {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for a label, if present.
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|&(_, c)| c)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, c)| c).sum()
    }
}

/// Count occurrences of the labels produced by `f` for each title, keeping
/// first-seen order as the tie-break when sorting by count.
fn count_labels<'a, I, F>(table: &'a CatalogTable, f: F) -> Vec<(String, u64)>
where
    F: Fn(&'a Title) -> I,
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u64> = HashMap::new();
    for title in &table.titles {
        for label in f(title) {
            let entry = counts.entry(label.to_string()).or_insert_with(|| {
                order.push(label.to_string());
                0
            });
            *entry += 1;
        }
    }
    order
        .into_iter()
        .map(|label| {
            let c = counts[&label];
            (label, c)
        })
        .collect()
}

/// Sort descending by count, stable so first-seen order breaks ties, and
/// truncate to the top `n`.
fn top_n(mut entries: Vec<(String, u64)>, n: usize) -> AggregateSeries {
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    AggregateSeries { entries }
}

// ---------------------------------------------------------------------------
// Per-chart aggregations
// ---------------------------------------------------------------------------

/// Count of titles per content type. The counts sum to `table.len()`.
pub fn type_distribution(table: &CatalogTable) -> AggregateSeries {
    let mut movies = 0u64;
    let mut shows = 0u64;
    for t in &table.titles {
        match t.kind {
            ContentType::Movie => movies += 1,
            ContentType::TvShow => shows += 1,
        }
    }
    let mut entries = Vec::new();
    if movies > 0 {
        entries.push((ContentType::Movie.to_string(), movies));
    }
    if shows > 0 {
        entries.push((ContentType::TvShow.to_string(), shows));
    }
    AggregateSeries { entries }
}

/// Count of titles added per `(year, content type)`, sorted by year then
/// type so line traces come out in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyCount {
    pub year: i32,
    pub kind: ContentType,
    pub count: u64,
}

pub fn yearly_by_type(table: &CatalogTable) -> Vec<YearlyCount> {
    let mut counts: HashMap<(i32, ContentType), u64> = HashMap::new();
    for t in &table.titles {
        *counts.entry((t.year_added(), t.kind)).or_insert(0) += 1;
    }
    let mut out: Vec<YearlyCount> = counts
        .into_iter()
        .map(|((year, kind), count)| YearlyCount { year, kind, count })
        .collect();
    out.sort_by_key(|y| (y.year, y.kind));
    out
}

/// Top `n` producing countries, exploding the comma-separated country cell.
pub fn top_countries(table: &CatalogTable, n: usize) -> AggregateSeries {
    top_n(count_labels(table, |t| t.countries()), n)
}

/// Top `n` genres, exploding `listed_in`.
pub fn top_genres(table: &CatalogTable, n: usize) -> AggregateSeries {
    top_n(count_labels(table, |t| t.genres()), n)
}

/// Count of titles per rating, in first-seen order.
pub fn rating_distribution(table: &CatalogTable) -> AggregateSeries {
    AggregateSeries {
        entries: count_labels(table, |t| std::iter::once(t.rating.as_str())),
    }
}

/// All numeric duration values grouped by content type, for box-plot style
/// summaries downstream. Rows whose duration text had no digits are
/// skipped; the unit (minutes vs seasons) is the caller's concern.
pub fn duration_by_type(table: &CatalogTable) -> Vec<(ContentType, Vec<f64>)> {
    let mut groups: Vec<(ContentType, Vec<f64>)> = Vec::new();
    for t in &table.titles {
        let Some(v) = t.duration_value else { continue };
        match groups.iter_mut().find(|(k, _)| *k == t.kind) {
            Some((_, vals)) => vals.push(v),
            None => groups.push((t.kind, vec![v])),
        }
    }
    groups
}

/// Top `n` directors by title count. The `"Not Specified"` sentinel is
/// excluded unless `include_unspecified` is set, since it would otherwise
/// dominate the chart.
pub fn top_directors(table: &CatalogTable, n: usize, include_unspecified: bool) -> AggregateSeries {
    let counted = count_labels(table, |t| std::iter::once(t.director.as_str()));
    let filtered: Vec<(String, u64)> = counted
        .into_iter()
        .filter(|(label, _)| include_unspecified || label != NOT_SPECIFIED)
        .collect();
    top_n(filtered, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::clean::clean;
    use crate::data::model::RawTitle;

    fn raw(kind: &str, country: &str, genres: &str, director: &str, rating: &str) -> RawTitle {
        RawTitle {
            show_id: String::new(),
            kind: kind.into(),
            title: format!("{kind}-{country}-{genres}"),
            director: director.into(),
            cast: "Someone".into(),
            country: country.into(),
            date_added: "2021-01-01".into(),
            release_year: "2020".into(),
            rating: rating.into(),
            duration: if kind == "Movie" { "90 min" } else { "2 Seasons" }.into(),
            listed_in: genres.into(),
        }
    }

    fn sample_table() -> CatalogTable {
        clean(vec![
            raw("Movie", "United States", "Dramas, Comedies", "Lee", "PG"),
            raw("Movie", "United States, India", "Dramas", "Lee", "PG-13"),
            raw("TV Show", "Japan", "Anime", "", "TV-14"),
        ])
        .unwrap()
    }

    #[test]
    fn type_counts_sum_to_table_len() {
        let table = sample_table();
        let series = type_distribution(&table);
        assert_eq!(series.total(), table.len() as u64);
        assert_eq!(series.get("Movie"), Some(2));
        assert_eq!(series.get("TV Show"), Some(1));
    }

    #[test]
    fn countries_are_exploded_and_ranked() {
        let table = sample_table();
        let series = top_countries(&table, 10);
        assert_eq!(series.entries[0], ("United States".to_string(), 2));
        assert_eq!(series.get("India"), Some(1));
        assert_eq!(series.get("Japan"), Some(1));
    }

    #[test]
    fn top_n_truncates_and_sorts_descending() {
        let table = sample_table();
        let series = top_countries(&table, 2);
        assert_eq!(series.len(), 2);
        assert!(series.entries.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn tied_counts_keep_first_seen_order() {
        let table = sample_table();
        // India and Japan are tied at 1; India appears first in the data.
        let series = top_countries(&table, 10);
        let india = series.entries.iter().position(|(l, _)| l == "India");
        let japan = series.entries.iter().position(|(l, _)| l == "Japan");
        assert!(india < japan);
    }

    #[test]
    fn genres_explode_on_single_row() {
        let table = clean(vec![raw("Movie", "", "Dramas, Comedies", "", "PG")]).unwrap();
        let series = top_genres(&table, 10);
        assert_eq!(
            series.entries,
            vec![("Dramas".to_string(), 1), ("Comedies".to_string(), 1)]
        );
    }

    #[test]
    fn yearly_counts_sorted_by_year() {
        let mut rows = vec![
            raw("Movie", "", "Dramas", "", "PG"),
            raw("TV Show", "", "Anime", "", "TV-14"),
        ];
        rows[1].date_added = "2019-05-01".into();
        let table = clean(rows).unwrap();
        let yearly = yearly_by_type(&table);
        assert_eq!(yearly.len(), 2);
        assert_eq!(yearly[0].year, 2019);
        assert_eq!(yearly[0].kind, ContentType::TvShow);
        assert_eq!(yearly[1].year, 2021);
    }

    #[test]
    fn durations_group_by_type() {
        let table = sample_table();
        let groups = duration_by_type(&table);
        let movies = groups
            .iter()
            .find(|(k, _)| *k == ContentType::Movie)
            .map(|(_, v)| v.clone())
            .unwrap();
        assert_eq!(movies, vec![90.0, 90.0]);
        let shows = groups
            .iter()
            .find(|(k, _)| *k == ContentType::TvShow)
            .map(|(_, v)| v.clone())
            .unwrap();
        assert_eq!(shows, vec![2.0]);
    }

    #[test]
    fn directors_exclude_sentinel_by_default() {
        let table = sample_table();
        let series = top_directors(&table, 10, false);
        assert_eq!(series.entries, vec![("Lee".to_string(), 2)]);

        let with_sentinel = top_directors(&table, 10, true);
        assert_eq!(with_sentinel.get(NOT_SPECIFIED), Some(1));
    }

    #[test]
    fn empty_table_yields_empty_series() {
        let table = CatalogTable { titles: Vec::new() };
        assert!(type_distribution(&table).is_empty());
        assert!(top_countries(&table, 10).is_empty());
        assert!(top_genres(&table, 10).is_empty());
        assert!(rating_distribution(&table).is_empty());
        assert!(yearly_by_type(&table).is_empty());
        assert!(duration_by_type(&table).is_empty());
        assert!(top_directors(&table, 10, false).is_empty());
    }

    #[test]
    fn rating_distribution_counts_rows() {
        let table = sample_table();
        let series = rating_distribution(&table);
        assert_eq!(series.total(), table.len() as u64);
        assert_eq!(series.get("PG"), Some(1));
    }
}
