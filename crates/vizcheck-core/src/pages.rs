//! Presentation page existence checks

use crate::report::HtmlReport;
use std::path::Path;
use tracing::debug;

/// Check that each named page exists under `base_dir`.
///
/// Existence only: content is never inspected, so an empty file of the
/// right name still counts as present.
pub fn check_pages(base_dir: &Path, names: &[&str]) -> Vec<HtmlReport> {
    names
        .iter()
        .map(|name| {
            let present = base_dir.join(name).exists();
            debug!(page = name, present, "checked presentation page");

            HtmlReport {
                name: (*name).to_string(),
                present,
            }
        })
        .collect()
}
