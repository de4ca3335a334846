use serde::{Deserialize, Serialize};

/// A chart specification in Plotly figure JSON shape.
///
/// The page passes the serialized figure straight to `Plotly.react`, so field
/// names follow plotly.js rather than Rust conventions where they differ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

/// One trace of a figure, tagged by its plotly.js `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<u64>,
    },
    Scatter {
        name: String,
        x: Vec<f64>,
        y: Vec<u8>,
        mode: ScatterMode,
    },
}

impl Trace {
    /// Number of slices (pie) or points (scatter) in this trace.
    pub fn len(&self) -> usize {
        match self {
            Self::Pie { labels, .. } => labels.len(),
            Self::Scatter { x, .. } => x.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScatterMode {
    Markers,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FigureLayout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Axis {
    pub title: Title,
    /// Fixed `[min, max]` view range. Plotly autoranges when absent.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Legend {
    pub title: Title,
}

impl Figure {
    /// Total slices or points across all traces.
    pub fn point_count(&self) -> usize {
        self.data.iter().map(Trace::len).sum()
    }

    /// True when no trace has anything to draw.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(Trace::is_empty)
    }
}
