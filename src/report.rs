use anyhow::Result;

use crate::analysis::aggregate::{
    self, AggregateSeries, YearlyCount,
};
use crate::chart::{ChartKind, ChartSpec, Renderer, Trace};
use crate::data::model::{CatalogTable, ContentType};

// ---------------------------------------------------------------------------
// Report – one chart per analysis
// ---------------------------------------------------------------------------

/// How many entries the "top N" charts show.
const TOP_N: usize = 10;

/// Run every analysis over the cleaned table and hand the resulting charts
/// to the renderer, one file per chart.
pub fn run_report(table: &CatalogTable, renderer: &mut dyn Renderer) -> Result<()> {
    log::info!("building report over {} titles", table.len());

    let charts = [
        type_chart(table),
        yearly_chart(table),
        countries_chart(table),
        genres_chart(table),
        rating_chart(table),
        duration_chart(table),
        directors_chart(table),
    ];

    for spec in &charts {
        log::info!("rendering '{}'", spec.title);
        renderer.render(spec)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Chart builders
// ---------------------------------------------------------------------------

fn series_trace(name: &str, series: &AggregateSeries) -> Trace {
    Trace {
        name: name.to_string(),
        labels: series.entries.iter().map(|(l, _)| l.clone()).collect(),
        values: series.entries.iter().map(|&(_, c)| c as f64).collect(),
    }
}

fn type_chart(table: &CatalogTable) -> ChartSpec {
    let series = aggregate::type_distribution(table);
    ChartSpec::new(ChartKind::Pie, "Content Type Distribution")
        .trace(series_trace("type", &series))
}

fn yearly_chart(table: &CatalogTable) -> ChartSpec {
    let yearly = aggregate::yearly_by_type(table);
    let mut spec = ChartSpec::new(ChartKind::Line, "Content Added Over Time")
        .axis_labels("Year", "Number of Titles");

    // One line trace per content type, years ascending.
    for kind in [ContentType::Movie, ContentType::TvShow] {
        let points: Vec<&YearlyCount> = yearly.iter().filter(|y| y.kind == kind).collect();
        if points.is_empty() {
            continue;
        }
        spec = spec.trace(Trace {
            name: kind.to_string(),
            labels: points.iter().map(|y| y.year.to_string()).collect(),
            values: points.iter().map(|y| y.count as f64).collect(),
        });
    }
    spec
}

fn countries_chart(table: &CatalogTable) -> ChartSpec {
    let series = aggregate::top_countries(table, TOP_N);
    ChartSpec::new(ChartKind::HBar, "Top 10 Countries by Title Count")
        .axis_labels("Number of Titles", "Country")
        .trace(series_trace("countries", &series))
}

fn genres_chart(table: &CatalogTable) -> ChartSpec {
    let series = aggregate::top_genres(table, TOP_N);
    ChartSpec::new(ChartKind::HBar, "Top 10 Genres")
        .axis_labels("Frequency", "Genre")
        .trace(series_trace("genres", &series))
}

fn rating_chart(table: &CatalogTable) -> ChartSpec {
    let series = aggregate::rating_distribution(table);
    ChartSpec::new(ChartKind::Pie, "Distribution of Content Ratings")
        .trace(series_trace("rating", &series))
}

fn duration_chart(table: &CatalogTable) -> ChartSpec {
    let groups = aggregate::duration_by_type(table);
    let mut spec = ChartSpec::new(ChartKind::Box, "Duration Distribution by Type")
        .axis_labels("Content Type", "Duration");
    for (kind, values) in groups {
        spec = spec.trace(Trace {
            name: kind.to_string(),
            labels: Vec::new(),
            values,
        });
    }
    spec
}

fn directors_chart(table: &CatalogTable) -> ChartSpec {
    let series = aggregate::top_directors(table, TOP_N, false);
    ChartSpec::new(ChartKind::HBar, "Top 10 Directors")
        .axis_labels("Number of Titles", "Director")
        .trace(series_trace("directors", &series))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::clean::clean;
    use crate::data::model::RawTitle;

    /// Renderer that records chart titles instead of drawing.
    struct Recording(Vec<String>);

    impl Renderer for Recording {
        fn render(&mut self, spec: &ChartSpec) -> Result<()> {
            self.0.push(spec.title.clone());
            Ok(())
        }
    }

    fn table() -> CatalogTable {
        clean(vec![RawTitle {
            show_id: "s1".into(),
            kind: "Movie".into(),
            title: "Dust".into(),
            director: "Lee".into(),
            cast: "Someone".into(),
            country: "United States".into(),
            date_added: "2021-01-01".into(),
            release_year: "2020".into(),
            rating: "PG".into(),
            duration: "90 min".into(),
            listed_in: "Dramas".into(),
        }])
        .unwrap()
    }

    #[test]
    fn report_renders_all_seven_charts() {
        let mut renderer = Recording(Vec::new());
        run_report(&table(), &mut renderer).unwrap();
        assert_eq!(renderer.0.len(), 7);
        assert!(renderer.0.contains(&"Top 10 Genres".to_string()));
    }

    #[test]
    fn yearly_chart_has_one_trace_per_present_type() {
        let spec = yearly_chart(&table());
        assert_eq!(spec.traces.len(), 1);
        assert_eq!(spec.traces[0].name, "Movie");
        assert_eq!(spec.traces[0].labels, vec!["2021"]);
    }
}
