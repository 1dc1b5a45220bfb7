/// Chart layer: the seam between the numeric results and whatever renders
/// them. Aggregations are packaged as a [`ChartSpec`] and handed to a
/// [`Renderer`]; nothing upstream depends on how (or whether) the chart is
/// drawn.
pub mod html;

use anyhow::Result;

// ---------------------------------------------------------------------------
// ChartSpec – what to draw
// ---------------------------------------------------------------------------

/// How a series should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Line,
    /// Horizontal bars (label axis vertical).
    HBar,
    /// Box plot: each trace's `values` is the full sample, `labels` unused.
    Box,
}

/// One named series within a chart. For `Pie` and `HBar` there is a single
/// trace and `labels` pairs with `values`; `Line` uses one trace per group;
/// `Box` uses one trace per group with `labels` empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// A complete chart: kind, title, axis labels, and its traces.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        ChartSpec {
            kind,
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            traces: Vec::new(),
        }
    }

    pub fn axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    pub fn trace(mut self, trace: Trace) -> Self {
        self.traces.push(trace);
        self
    }
}

// ---------------------------------------------------------------------------
// Renderer – the plotting collaborator
// ---------------------------------------------------------------------------

/// Anything that can turn a [`ChartSpec`] into an output artefact.
pub trait Renderer {
    fn render(&mut self, spec: &ChartSpec) -> Result<()>;
}
