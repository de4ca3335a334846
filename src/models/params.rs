use serde::{Deserialize, Serialize};

/// One entry of the site dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// A labelled tick on the payload slider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SliderMark {
    pub value: i64,
    pub label: String,
}

/// Fixed configuration and initial value of the payload range slider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderParams {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Initial `[low, high]` handle positions.
    pub value: [f64; 2],
}

/// Display parameters derived from the launch table at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardParams {
    pub site_options: Vec<DropdownOption>,
    /// Initial dropdown value.
    pub default_site: String,
    pub payload_slider: SliderParams,
}
