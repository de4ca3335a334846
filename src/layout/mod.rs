//! Static arrangement of the dashboard's controls and chart placeholders.
//!
//! The layout is declared as a [`Component`] tree so it can be served as JSON
//! and rendered to the HTML page from the same source.

mod render;

pub use render::render_page;

use serde::{Deserialize, Serialize};

use crate::models::{DashboardParams, DropdownOption, SliderMark};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

/// Inline style subset used by the layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Style {
    #[serde(rename = "textAlign", skip_serializing_if = "Option::is_none", default)]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
    /// Font size in pixels.
    #[serde(rename = "fontSize", skip_serializing_if = "Option::is_none", default)]
    pub font_size: Option<u32>,
}

/// A node of the dashboard layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Div {
        children: Vec<Component>,
    },
    Heading {
        text: String,
        style: Style,
    },
    Paragraph {
        text: String,
    },
    Break,
    Dropdown {
        id: String,
        options: Vec<DropdownOption>,
        value: String,
        placeholder: String,
        searchable: bool,
    },
    RangeSlider {
        id: String,
        min: f64,
        max: f64,
        step: f64,
        marks: Vec<SliderMark>,
        value: [f64; 2],
    },
    Graph {
        id: String,
    },
}

impl Component {
    /// Find a component by its control or graph id, searching depth-first.
    pub fn find(&self, wanted: &str) -> Option<&Component> {
        match self {
            Self::Div { children } => children.iter().find_map(|c| c.find(wanted)),
            Self::Dropdown { id, .. } | Self::RangeSlider { id, .. } | Self::Graph { id }
                if id == wanted =>
            {
                Some(self)
            }
            _ => None,
        }
    }
}

/// Declare the dashboard layout for the given derived parameters.
pub fn dashboard_layout(params: &DashboardParams) -> Component {
    let slider = &params.payload_slider;

    Component::Div {
        children: vec![
            Component::Heading {
                text: DASHBOARD_TITLE.to_string(),
                style: Style {
                    text_align: Some("center".to_string()),
                    color: Some("#503D36".to_string()),
                    font_size: Some(40),
                },
            },
            Component::Break,
            Component::Dropdown {
                id: SITE_DROPDOWN_ID.to_string(),
                options: params.site_options.clone(),
                value: params.default_site.clone(),
                placeholder: "Select Launch Site".to_string(),
                searchable: true,
            },
            Component::Break,
            Component::Div {
                children: vec![Component::Graph {
                    id: PIE_CHART_ID.to_string(),
                }],
            },
            Component::Break,
            Component::Paragraph {
                text: "Payload range (Kg):".to_string(),
            },
            Component::RangeSlider {
                id: PAYLOAD_SLIDER_ID.to_string(),
                min: slider.min,
                max: slider.max,
                step: slider.step,
                marks: slider.marks.clone(),
                value: slider.value,
            },
            Component::Break,
            Component::Div {
                children: vec![Component::Graph {
                    id: SCATTER_CHART_ID.to_string(),
                }],
            },
        ],
    }
}
