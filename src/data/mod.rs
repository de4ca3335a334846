//! Loading and querying the launch dataset.

mod error;

pub use error::LoadError;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::models::{LaunchRecord, Outcome, PayloadRange, SiteSelection};

/// A row as it appears in the CSV. Columns not named here are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

/// The launch records, held immutable for the life of the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
}

impl LaunchTable {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }

    /// Load the table from a CSV file with a header row.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file)?;
        tracing::info!(
            "Loaded {} launch records from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Load the table from any CSV source with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
            let raw = row?;
            // Row numbers are 1-based and skip the header.
            let outcome = Outcome::from_code(raw.class).ok_or(LoadError::InvalidOutcome {
                row: index + 1,
                value: raw.class,
            })?;
            records.push(LaunchRecord {
                site: raw.site,
                outcome,
                payload_mass_kg: raw.payload_mass_kg,
                booster_version_category: raw.booster_version_category,
            });
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows at the selected site, in table order.
    pub fn filter_site<'a>(
        &'a self,
        site: &'a SiteSelection,
    ) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.records.iter().filter(move |r| site.matches(&r.site))
    }

    /// Rows at the selected site whose payload lies inside `range`.
    pub fn filter<'a>(
        &'a self,
        site: &'a SiteSelection,
        range: PayloadRange,
    ) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.filter_site(site)
            .filter(move |r| range.contains(r.payload_mass_kg))
    }

    /// Distinct site names in order of first appearance.
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in &self.records {
            if !sites.contains(&record.site.as_str()) {
                sites.push(&record.site);
            }
        }
        sites
    }

    pub fn contains_site(&self, site: &str) -> bool {
        self.records.iter().any(|r| r.site == site)
    }

    /// Smallest and largest payload mass, or `None` for an empty table.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        self.records.iter().fold(None, |acc, r| {
            let mass = r.payload_mass_kg;
            match acc {
                None => Some((mass, mass)),
                Some((min, max)) => Some((min.min(mass), max.max(mass))),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,1,525.0,F9 v1.0  B0005,v1.0
2,3,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
";

    #[test]
    fn loads_named_columns_and_ignores_the_rest() {
        let table = LaunchTable::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);

        let first = &table.records()[0];
        assert_eq!(first.site, "CCAFS LC-40");
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.payload_mass_kg, 0.0);
        assert_eq!(first.booster_version_category, "v1.0");
    }

    #[test]
    fn rejects_outcome_outside_zero_and_one() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\nA,2,100,FT\n";
        let err = LaunchTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidOutcome { row: 1, value: 2 }));
    }

    #[test]
    fn missing_column_is_a_csv_error() {
        let csv = "Launch Site,class,Booster Version Category\nA,1,FT\n";
        let err = LaunchTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn non_numeric_payload_is_a_csv_error() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\nA,1,heavy,FT\n";
        let err = LaunchTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn sites_keep_first_appearance_order() {
        let table = LaunchTable::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(table.sites(), vec!["CCAFS LC-40", "VAFB SLC-4E"]);
    }

    #[test]
    fn payload_bounds_span_the_table() {
        let table = LaunchTable::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(table.payload_bounds(), Some((0.0, 9600.0)));
        assert_eq!(LaunchTable::default().payload_bounds(), None);
    }

    #[test]
    fn filter_applies_site_and_payload() {
        let table = LaunchTable::from_reader(CSV.as_bytes()).unwrap();
        let site = SiteSelection::parse("CCAFS LC-40");
        let rows: Vec<_> = table.filter(&site, PayloadRange::new(100.0, 10000.0)).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].payload_mass_kg, 525.0);
    }
}
