//! vizcheck CLI application
//!
//! Validates the visualization showcase's static assets: each dataset CSV
//! must exist and parse with its expected columns, and each presentation
//! page must exist on disk. Exit code 0 when everything checks out, 1
//! otherwise.
//!
//! ```bash
//! vizcheck                    # check dep/ with the built-in table
//! vizcheck --strict-columns   # missing columns also fail the run
//! vizcheck --json             # machine-readable report
//! ```

mod args;
mod commands;
mod console;

use clap::Parser;
use console::CliConsole;

pub use args::Cli;

fn main() {
    // Initialize logging with environment-based filtering
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let code = match commands::check::execute(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            CliConsole::default().error(&format!("{err:#}"));
            1
        }
    };

    std::process::exit(code);
}
