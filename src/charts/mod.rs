//! The two chart handlers.
//!
//! Both are pure functions of the table and the current control values. The
//! HTTP layer calls them on every control change and returns the figure as-is.

use crate::data::LaunchTable;
use crate::models::{
    Axis, Figure, FigureLayout, Legend, PayloadRange, ScatterMode, SiteSelection, Title, Trace,
};

pub const PAYLOAD_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_TITLE: &str = "Launch Success";
pub const BOOSTER_LEGEND_TITLE: &str = "Booster Version Category";

/// Success pie for the selected site.
///
/// For [`SiteSelection::All`] there is one slice per site holding its number
/// of successful launches; sites without a success still get an empty slice.
/// For a single site there is one slice per outcome present at that site,
/// labelled with the outcome code and sized by row count.
pub fn pie_chart(table: &LaunchTable, site: &SiteSelection) -> Figure {
    let (labels, values, title) = match site {
        SiteSelection::All => {
            let mut tally = Tally::default();
            for record in table.records() {
                tally.add(&record.site, u64::from(record.outcome.code()));
            }
            let (labels, values) = tally.into_parts();
            (labels, values, "Total Success Launches By Site".to_string())
        }
        SiteSelection::Site(name) => {
            if !table.contains_site(name) {
                tracing::debug!("Pie chart requested for unknown site {:?}", name);
            }
            let mut tally = Tally::default();
            for record in table.filter_site(site) {
                tally.add(&record.outcome.code().to_string(), 1);
            }
            let (labels, values) = tally.into_parts();
            (
                labels,
                values,
                format!("Total Success Launches for site {}", name),
            )
        }
    };

    Figure {
        data: vec![Trace::Pie { labels, values }],
        layout: FigureLayout {
            title: Title::new(title),
            ..FigureLayout::default()
        },
    }
}

/// Payload against outcome for the selected site, one trace per booster
/// version category.
///
/// Only rows with payload inside `range` are plotted, and the x axis is fixed
/// to `range` exactly as given. An inverted range is not corrected: it yields
/// no points and an inverted axis.
pub fn scatter_chart(table: &LaunchTable, site: &SiteSelection, range: PayloadRange) -> Figure {
    if let SiteSelection::Site(name) = site {
        if !table.contains_site(name) {
            tracing::debug!("Scatter chart requested for unknown site {:?}", name);
        }
    }
    if range.is_inverted() {
        tracing::debug!(
            "Scatter chart requested with inverted payload range [{}, {}]",
            range.low,
            range.high
        );
    }

    let mut traces: Vec<(String, Vec<f64>, Vec<u8>)> = Vec::new();
    for record in table.filter(site, range) {
        let category = record.booster_version_category.as_str();
        let index = match traces.iter().position(|(name, _, _)| name == category) {
            Some(index) => index,
            None => {
                traces.push((category.to_string(), Vec::new(), Vec::new()));
                traces.len() - 1
            }
        };
        let (_, x, y) = &mut traces[index];
        x.push(record.payload_mass_kg);
        y.push(record.outcome.code());
    }

    Figure {
        data: traces
            .into_iter()
            .map(|(name, x, y)| Trace::Scatter {
                name,
                x,
                y,
                mode: ScatterMode::Markers,
            })
            .collect(),
        layout: FigureLayout {
            title: Title::new(format!(
                "Correlation between Payload and Success Rate, for Launch Site {}",
                site
            )),
            xaxis: Some(Axis {
                title: Title::new(PAYLOAD_AXIS_TITLE),
                range: Some(range.as_array()),
            }),
            yaxis: Some(Axis {
                title: Title::new(OUTCOME_AXIS_TITLE),
                range: None,
            }),
            legend: Some(Legend {
                title: Title::new(BOOSTER_LEGEND_TITLE),
            }),
        },
    }
}

/// Label/value accumulator that keeps labels in first-seen order.
#[derive(Default)]
struct Tally {
    labels: Vec<String>,
    values: Vec<u64>,
}

impl Tally {
    fn add(&mut self, label: &str, amount: u64) {
        match self.labels.iter().position(|l| l == label) {
            Some(index) => self.values[index] += amount,
            None => {
                self.labels.push(label.to_string());
                self.values.push(amount);
            }
        }
    }

    fn into_parts(self) -> (Vec<String>, Vec<u64>) {
        (self.labels, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, Outcome};
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log lines written by a test subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let output = String::from_utf8_lossy(&logs.0.lock().unwrap()).into_owned();
        (result, output)
    }

    fn record(site: &str, outcome: Outcome, payload: f64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            outcome,
            payload_mass_kg: payload,
            booster_version_category: booster.to_string(),
        }
    }

    fn sample() -> LaunchTable {
        LaunchTable::new(vec![
            record("A", Outcome::Success, 500.0, "v1.0"),
            record("A", Outcome::Success, 2500.0, "FT"),
            record("A", Outcome::Failure, 4000.0, "v1.0"),
            record("B", Outcome::Success, 0.0, "B4"),
        ])
    }

    fn pie_parts(figure: &Figure) -> (Vec<String>, Vec<u64>) {
        match &figure.data[..] {
            [Trace::Pie { labels, values }] => (labels.clone(), values.clone()),
            other => panic!("expected a single pie trace, got {:?}", other),
        }
    }

    #[test]
    fn test_pie_all_sums_successes_per_site() {
        let figure = pie_chart(&sample(), &SiteSelection::All);
        let (labels, values) = pie_parts(&figure);
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(values, vec![2, 1]);
        assert_eq!(figure.layout.title.text, "Total Success Launches By Site");
    }

    #[test]
    fn test_pie_all_keeps_sites_without_success() {
        let table = LaunchTable::new(vec![
            record("A", Outcome::Success, 1.0, "FT"),
            record("C", Outcome::Failure, 1.0, "FT"),
        ]);
        let (labels, values) = pie_parts(&pie_chart(&table, &SiteSelection::All));
        assert_eq!(labels, vec!["A", "C"]);
        assert_eq!(values, vec![1, 0]);
    }

    #[test]
    fn test_pie_site_counts_outcomes() {
        let figure = pie_chart(&sample(), &SiteSelection::parse("A"));
        let (labels, values) = pie_parts(&figure);
        assert_eq!(labels, vec!["1", "0"]);
        assert_eq!(values, vec![2, 1]);
        assert_eq!(figure.layout.title.text, "Total Success Launches for site A");
    }

    #[test]
    fn test_pie_unknown_site_is_empty() {
        let figure = pie_chart(&sample(), &SiteSelection::parse("Nowhere"));
        assert_eq!(figure.point_count(), 0);
        assert!(figure.is_empty());
        assert!(figure.data[0].is_empty());
    }

    #[test]
    fn test_unknown_site_is_logged() {
        let table = sample();
        assert!(!table.contains_site("Nowhere"));

        let (pie, logs) = with_captured_logs(|| pie_chart(&table, &SiteSelection::parse("Nowhere")));
        assert!(pie.is_empty());
        assert!(logs.contains("Pie chart requested for unknown site \"Nowhere\""), "{}", logs);

        let range = PayloadRange::new(0.0, 10_000.0);
        let (_, logs) =
            with_captured_logs(|| scatter_chart(&table, &SiteSelection::parse("Nowhere"), range));
        assert!(logs.contains("Scatter chart requested for unknown site \"Nowhere\""), "{}", logs);
    }

    #[test]
    fn test_known_site_is_not_logged() {
        let table = sample();
        let (_, logs) = with_captured_logs(|| pie_chart(&table, &SiteSelection::parse("A")));
        assert!(!logs.contains("unknown site"), "{}", logs);
    }

    #[test]
    fn test_inverted_range_is_logged() {
        let (_, logs) = with_captured_logs(|| {
            scatter_chart(&sample(), &SiteSelection::All, PayloadRange::new(5000.0, 1000.0))
        });
        assert!(logs.contains("inverted payload range [5000, 1000]"), "{}", logs);
    }

    #[test]
    fn test_scatter_groups_by_booster() {
        let figure = scatter_chart(
            &sample(),
            &SiteSelection::All,
            PayloadRange::new(0.0, 10_000.0),
        );
        let names: Vec<&str> = figure
            .data
            .iter()
            .map(|t| match t {
                Trace::Scatter { name, .. } => name.as_str(),
                Trace::Pie { .. } => panic!("unexpected pie trace"),
            })
            .collect();
        assert_eq!(names, vec!["v1.0", "FT", "B4"]);
        assert_eq!(figure.point_count(), 4);

        match &figure.data[0] {
            Trace::Scatter { x, y, .. } => {
                assert_eq!(x, &vec![500.0, 4000.0]);
                assert_eq!(y, &vec![1, 0]);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_scatter_filters_payload_and_sets_axis() {
        let range = PayloadRange::new(1000.0, 3000.0);
        let figure = scatter_chart(&sample(), &SiteSelection::parse("A"), range);
        assert_eq!(figure.point_count(), 1);

        let xaxis = figure.layout.xaxis.as_ref().unwrap();
        assert_eq!(xaxis.range, Some([1000.0, 3000.0]));
        assert_eq!(xaxis.title.text, "Payload Mass (kg)");
        assert_eq!(
            figure.layout.title.text,
            "Correlation between Payload and Success Rate, for Launch Site A"
        );
    }

    #[test]
    fn test_scatter_zero_range_keeps_zero_payloads() {
        let figure = scatter_chart(&sample(), &SiteSelection::All, PayloadRange::new(0.0, 0.0));
        assert_eq!(figure.point_count(), 1);

        let figure = scatter_chart(
            &sample(),
            &SiteSelection::parse("A"),
            PayloadRange::new(0.0, 0.0),
        );
        assert_eq!(figure.point_count(), 0);
    }

    #[test]
    fn test_scatter_inverted_range_is_degenerate() {
        let figure = scatter_chart(
            &sample(),
            &SiteSelection::All,
            PayloadRange::new(5000.0, 1000.0),
        );
        assert!(figure.data.is_empty());
        assert_eq!(
            figure.layout.xaxis.unwrap().range,
            Some([5000.0, 1000.0])
        );
    }

    #[test]
    fn test_handlers_are_idempotent() {
        let table = sample();
        let site = SiteSelection::parse("A");
        let range = PayloadRange::new(0.0, 5000.0);
        assert_eq!(pie_chart(&table, &site), pie_chart(&table, &site));
        assert_eq!(
            scatter_chart(&table, &site, range),
            scatter_chart(&table, &site, range)
        );
    }
}
