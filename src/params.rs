//! Display parameters derived from the launch table.
//!
//! Computed once at startup and served unchanged for the life of the process.

use crate::data::LaunchTable;
use crate::models::{
    DashboardParams, DropdownOption, SliderMark, SliderParams, ALL_SITES, ALL_SITES_LABEL,
};

/// Fixed lower bound of the payload slider, in kilograms.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
/// Fixed upper bound of the payload slider, in kilograms.
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;
/// Number of labelled ticks on the payload slider.
pub const PAYLOAD_SLIDER_MARKS: usize = 5;

/// Dropdown options: the "All Sites" entry followed by each distinct site.
///
/// Sites are sorted by name. An empty table yields no options at all. A site
/// literally named `ALL` is left out: its value would select every site.
pub fn site_options(table: &LaunchTable) -> Vec<DropdownOption> {
    let mut sites = table.sites();
    if sites.is_empty() {
        return Vec::new();
    }
    sites.retain(|site| {
        let reserved = *site == ALL_SITES;
        if reserved {
            tracing::warn!(
                "Site {:?} clashes with the all-sites value, leaving it out of the dropdown",
                site
            );
        }
        !reserved
    });
    sites.sort_unstable();

    let mut options = Vec::with_capacity(sites.len() + 1);
    options.push(DropdownOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES.to_string(),
    });
    options.extend(sites.into_iter().map(|site| DropdownOption {
        label: site.to_string(),
        value: site.to_string(),
    }));
    options
}

/// `count` evenly spaced integer marks from `min` to `max` inclusive.
///
/// Positions are truncated toward zero, so `(0, 10000, 5)` gives
/// `0, 2500, 5000, 7500, 10000`. A single mark sits at `min`.
pub fn slider_marks(min: f64, max: f64, count: usize) -> Vec<SliderMark> {
    match count {
        0 => Vec::new(),
        1 => vec![mark(min)],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    // Pin the last mark so rounding never drops it below `max`.
                    if i == count - 1 {
                        mark(max)
                    } else {
                        mark(min + step * i as f64)
                    }
                })
                .collect()
        }
    }
}

fn mark(position: f64) -> SliderMark {
    let value = position.trunc() as i64;
    SliderMark {
        value,
        label: value.to_string(),
    }
}

impl DashboardParams {
    /// Derive every display parameter the layout needs from `table`.
    pub fn derive(table: &LaunchTable) -> Self {
        let value = match table.payload_bounds() {
            Some((min, max)) => [min, max],
            None => [PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX],
        };

        Self {
            site_options: site_options(table),
            default_site: ALL_SITES.to_string(),
            payload_slider: SliderParams {
                min: PAYLOAD_SLIDER_MIN,
                max: PAYLOAD_SLIDER_MAX,
                step: PAYLOAD_SLIDER_STEP,
                marks: slider_marks(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MARKS),
                value,
            },
        }
    }
}
