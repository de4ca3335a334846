//! Plain-text summary of the loaded dataset, printed by `summary`.

use crate::data::LaunchTable;
use crate::models::{DashboardParams, SiteSelection};

/// Render the derived parameters and per-site outcome counts.
///
/// Example output:
/// ```text
/// Launch records: 4
/// Payload range: 0 - 9600 kg
/// Slider marks: 0, 2500, 5000, 7500, 10000
///
/// Site         Launches  Successes  Failures
/// CCAFS LC-40         3          2         1
/// VAFB SLC-4E         1          1         0
/// ```
pub fn render_summary(table: &LaunchTable, params: &DashboardParams) -> String {
    let mut output = String::new();
    output.push_str(&format!("Launch records: {}\n", table.len()));

    match table.payload_bounds() {
        Some((min, max)) => output.push_str(&format!("Payload range: {} - {} kg\n", min, max)),
        None => output.push_str("Payload range: n/a\n"),
    }

    let marks: Vec<&str> = params
        .payload_slider
        .marks
        .iter()
        .map(|m| m.label.as_str())
        .collect();
    output.push_str(&format!("Slider marks: {}\n", marks.join(", ")));

    // Read sites from the table so one named like the all-sites value is
    // still reported on its own.
    let mut sites = table.sites();
    sites.sort_unstable();
    if sites.is_empty() {
        return output;
    }

    let width = sites
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0)
        .max("Site".len());

    output.push('\n');
    output.push_str(&format!(
        "{:<width$}  {:>8}  {:>9}  {:>8}\n",
        "Site",
        "Launches",
        "Successes",
        "Failures",
        width = width
    ));
    for site in sites {
        let selection = SiteSelection::Site(site.to_string());
        let (launches, successes) = table
            .filter_site(&selection)
            .fold((0usize, 0usize), |(n, ok), r| {
                (n + 1, ok + usize::from(r.outcome.is_success()))
            });
        output.push_str(&format!(
            "{:<width$}  {:>8}  {:>9}  {:>8}\n",
            site,
            launches,
            successes,
            launches - successes,
            width = width
        ));
    }
    output
}
