//! Run driver
//!
//! Executes every configured check in sequence and aggregates the outcome.

use crate::dataset::validate_dataset;
use crate::error::{VizError, VizResult};
use crate::pages::check_pages;
use crate::report::RunSummary;
use crate::rules::ValidationRule;
use std::path::Path;
use tracing::{debug, warn};

/// Run every dataset rule and page check under `base_dir`.
///
/// A missing base directory is the only fatal condition; every per-file
/// failure is recorded in the summary and iteration continues.
pub fn run(base_dir: &Path, rules: &[ValidationRule], pages: &[&str]) -> VizResult<RunSummary> {
    if !base_dir.is_dir() {
        warn!(path = %base_dir.display(), "base directory missing, aborting run");
        return Err(VizError::missing_base_dir(base_dir.display().to_string()));
    }

    debug!(
        path = %base_dir.display(),
        datasets = rules.len(),
        pages = pages.len(),
        "starting validation run"
    );

    let csv = rules
        .iter()
        .map(|rule| validate_dataset(&base_dir.join(&rule.filename), &rule.expected_headers))
        .collect();

    let html = check_pages(base_dir, pages);

    Ok(RunSummary { csv, html })
}
