//! Dataset file validation
//!
//! Reads one CSV file, diffs its header row against the expected columns,
//! and counts the remaining records. Row width mismatches are tolerated and
//! merely counted; only a file that cannot be opened or parsed at all
//! produces a failing outcome.

use crate::report::{CsvOutcome, CsvReport};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Validate one dataset file against its expected columns.
///
/// Missing columns are recorded in the report but do not fail the file;
/// the caller decides how much weight they carry.
pub fn validate_dataset(path: &Path, expected_headers: &[String]) -> CsvReport {
    let outcome = read_dataset(path, expected_headers);
    debug!(path = %path.display(), ?outcome, "validated dataset file");

    CsvReport {
        path: path.to_path_buf(),
        outcome,
    }
}

fn read_dataset(path: &Path, expected_headers: &[String]) -> CsvOutcome {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return CsvOutcome::NotFound,
        Err(err) => {
            return CsvOutcome::Io {
                message: err.to_string(),
            }
        }
    };

    // flexible: ragged rows are counted, not rejected
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = match reader.headers() {
        Ok(record) => record.iter().map(str::to_string).collect(),
        Err(err) => return outcome_for_error(&err),
    };

    if headers.is_empty() {
        return CsvOutcome::Parse {
            message: "file contains no header row".to_string(),
        };
    }

    let mut missing: Vec<String> = expected_headers
        .iter()
        .filter(|expected| !headers.iter().any(|header| header == *expected))
        .cloned()
        .collect();
    missing.sort();

    let mut rows = 0u64;
    for record in reader.records() {
        if let Err(err) = record {
            return outcome_for_error(&err);
        }
        rows += 1;
    }

    CsvOutcome::Parsed {
        headers,
        missing,
        rows,
    }
}

fn outcome_for_error(err: &csv::Error) -> CsvOutcome {
    if matches!(err.kind(), csv::ErrorKind::Io(_)) {
        CsvOutcome::Io {
            message: err.to_string(),
        }
    } else {
        CsvOutcome::Parse {
            message: err.to_string(),
        }
    }
}
