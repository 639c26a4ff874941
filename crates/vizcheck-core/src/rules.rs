//! The fixed validation table for the showcase's asset directory

/// Directory the showcase publishes its static assets into, relative to the
/// working directory.
pub const DEFAULT_BASE_DIR: &str = "dep";

/// Presentation pages checked for existence only.
pub const HTML_FILES: &[&str] = &[
    "index.html",
    "vis1.html",
    "vis2a.html",
    "vis2b.html",
    "vis3.html",
];

/// One dataset file and the columns it must carry.
///
/// Comparison against the file's header row ignores order; the order here
/// only drives report output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRule {
    pub filename: String,
    pub expected_headers: Vec<String>,
}

impl ValidationRule {
    /// Create a new rule
    pub fn new(
        filename: impl Into<String>,
        expected_headers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            filename: filename.into(),
            expected_headers: expected_headers.into_iter().map(Into::into).collect(),
        }
    }
}

/// The dataset files the showcase ships and the columns each must have.
///
/// Built once at startup and never mutated.
pub fn default_rules() -> Vec<ValidationRule> {
    vec![
        ValidationRule::new(
            "data.csv",
            ["Year", "Location", "No_of_Participants", "Description"],
        ),
        ValidationRule::new(
            "vis1_data.csv",
            ["breed", "entries", "attendees", "category", "day"],
        ),
        ValidationRule::new("vis2a_data.csv", ["group", "breed", "points"]),
        ValidationRule::new("vis2b_data.csv", ["group", "bis", "rbis"]),
    ]
}
