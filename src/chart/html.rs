use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, Value as JsonValue};

use super::{ChartKind, ChartSpec, Renderer};

// ---------------------------------------------------------------------------
// PlotlyHtml – self-contained HTML chart files
// ---------------------------------------------------------------------------

/// Renders each chart as a standalone HTML file in `out_dir`, embedding the
/// figure as plotly.js data. The file name is a slug of the chart title
/// ("Top 10 Genres" → `top_10_genres.html`).
pub struct PlotlyHtml {
    out_dir: PathBuf,
}

impl PlotlyHtml {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        PlotlyHtml {
            out_dir: out_dir.into(),
        }
    }

    /// Output path for a given chart title.
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.out_dir.join(format!("{}.html", slug(title)))
    }
}

impl Renderer for PlotlyHtml {
    fn render(&mut self, spec: &ChartSpec) -> Result<()> {
        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("creating {}", self.out_dir.display()))?;

        let page = render_page(spec);
        let path = self.path_for(&spec.title);
        std::fs::write(&path, page).with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Figure construction
// ---------------------------------------------------------------------------

fn render_page(spec: &ChartSpec) -> String {
    let data = JsonValue::Array(spec.traces.iter().map(|t| trace_json(spec.kind, t)).collect());
    let layout = json!({
        "title": { "text": spec.title },
        "xaxis": { "title": { "text": spec.x_label } },
        "yaxis": { "title": { "text": spec.y_label } },
    });

    format!(
        "<!DOCTYPE html>\n\
         <html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <script src=\"https://cdn.plot.ly/plotly-2.35.2.min.js\"></script>\n\
         </head>\n<body>\n<div id=\"chart\"></div>\n<script>\n\
         Plotly.newPlot(\"chart\", {data}, {layout});\n\
         </script>\n</body>\n</html>\n",
        title = spec.title,
        data = data,
        layout = layout,
    )
}

fn trace_json(kind: ChartKind, trace: &super::Trace) -> JsonValue {
    match kind {
        ChartKind::Pie => json!({
            "type": "pie",
            "name": trace.name,
            "labels": trace.labels,
            "values": trace.values,
        }),
        ChartKind::Line => json!({
            "type": "scatter",
            "mode": "lines+markers",
            "name": trace.name,
            "x": trace.labels,
            "y": trace.values,
        }),
        // Horizontal bars: values along x, labels along y.
        ChartKind::HBar => json!({
            "type": "bar",
            "orientation": "h",
            "name": trace.name,
            "x": trace.values,
            "y": trace.labels,
        }),
        ChartKind::Box => json!({
            "type": "box",
            "name": trace.name,
            "y": trace.values,
        }),
    }
}

/// Lowercase, alphanumerics kept, everything else collapsed to single
/// underscores.
fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut last_sep = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_sep = false;
        } else if !last_sep {
            out.push('_');
            last_sep = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
