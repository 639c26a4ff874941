//! CLI argument definitions using clap
//!
//! The bare invocation checks the default asset directory with the
//! built-in rule table:
//! - vizcheck                     # check dep/
//! - vizcheck --base-dir build    # check a different directory
//! - vizcheck --strict-columns    # missing columns fail the run
//! - vizcheck --json              # machine-readable report

use clap::Parser;
use std::path::PathBuf;
use vizcheck_core::DEFAULT_BASE_DIR;

#[derive(Parser, Debug)]
#[command(name = "vizcheck")]
#[command(about = "Validate the showcase's dataset CSVs and presentation pages")]
#[command(version)]
pub struct Cli {
    /// Directory holding the published assets
    #[arg(long, default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// Fail the run when a dataset is missing expected columns
    #[arg(long)]
    pub strict_columns: bool,

    /// Emit the report as JSON instead of the human-readable listing
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,
}
