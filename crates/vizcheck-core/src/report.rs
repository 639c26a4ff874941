//! Report types produced by the checks and consumed by the console output

use serde::Serialize;
use std::path::PathBuf;

/// Outcome of attempting to read one dataset file
///
/// Every failure mode is a value here rather than a propagated error, so
/// the run driver can aggregate outcomes uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CsvOutcome {
    /// The file opened and parsed as delimited text
    Parsed {
        /// Header row as found in the file, in file order
        headers: Vec<String>,
        /// Expected columns absent from the header row, sorted
        missing: Vec<String>,
        /// Data records after the header row
        rows: u64,
    },
    /// The path did not resolve to a readable file
    NotFound,
    /// The content could not be parsed as delimited UTF-8 text
    Parse { message: String },
    /// Any other IO failure while reading
    Io { message: String },
}

/// Validation report for one configured dataset file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: CsvOutcome,
}

impl CsvReport {
    /// True when the file could be opened and parsed
    pub fn readable(&self) -> bool {
        matches!(self.outcome, CsvOutcome::Parsed { .. })
    }

    /// True when no expected column is missing
    ///
    /// Vacuously true for unreadable files, which already count as
    /// failures through [`CsvReport::readable`].
    pub fn columns_ok(&self) -> bool {
        match &self.outcome {
            CsvOutcome::Parsed { missing, .. } => missing.is_empty(),
            _ => true,
        }
    }
}

/// Existence report for one presentation page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlReport {
    pub name: String,
    pub present: bool,
}

/// Aggregate outcome of a full validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct RunSummary {
    pub csv: Vec<CsvReport>,
    pub html: Vec<HtmlReport>,
}

impl RunSummary {
    /// Overall verdict for the run.
    ///
    /// Unreadable datasets and missing pages always fail the run. Missing
    /// expected columns are informational unless `strict_columns` is set.
    pub fn passed(&self, strict_columns: bool) -> bool {
        let csv_ok = self
            .csv
            .iter()
            .all(|r| r.readable() && (!strict_columns || r.columns_ok()));
        let html_ok = self.html.iter().all(|r| r.present);
        csv_ok && html_ok
    }

    /// (passed, failed) counts across both check passes, using the same
    /// strictness as [`RunSummary::passed`]
    pub fn counts(&self, strict_columns: bool) -> (usize, usize) {
        let mut passed = 0;
        let mut failed = 0;

        for report in &self.csv {
            if report.readable() && (!strict_columns || report.columns_ok()) {
                passed += 1;
            } else {
                failed += 1;
            }
        }
        for report in &self.html {
            if report.present {
                passed += 1;
            } else {
                failed += 1;
            }
        }

        (passed, failed)
    }
}
