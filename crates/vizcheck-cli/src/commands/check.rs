//! The asset check command
//!
//! Runs every configured check and prints a per-file report followed by a
//! summary line. The human-readable listing mirrors what the showcase team
//! reads in CI logs; `--json` swaps it for a single machine-readable object.

use crate::args::Cli;
use crate::console::CliConsole;
use anyhow::Result;
use colored::*;
use serde_json::json;
use vizcheck_core::{default_rules, runner, CsvOutcome, CsvReport, RunSummary, HTML_FILES};

/// Run the validation and print the report.
///
/// Returns the overall verdict; the caller maps it to the process exit
/// code.
pub fn execute(cli: &Cli) -> Result<bool> {
    tracing::debug!(
        base_dir = %cli.base_dir.display(),
        strict = cli.strict_columns,
        json = cli.json,
        "running asset check"
    );

    let rules = default_rules();
    let summary = runner::run(&cli.base_dir, &rules, HTML_FILES)?;
    let passed = summary.passed(cli.strict_columns);

    if cli.json {
        print_json(&summary, passed)?;
    } else {
        print_report(&summary, passed, cli);
    }

    Ok(passed)
}

fn print_json(summary: &RunSummary, passed: bool) -> Result<()> {
    let report = json!({
        "passed": passed,
        "csv": summary.csv,
        "html": summary.html,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_report(summary: &RunSummary, passed: bool, cli: &Cli) {
    let console = CliConsole::new(cli.verbose);

    console.print_header("Visualization Showcase Asset Check");
    console.info(&format!(
        "base directory: {} ({} dataset files, {} pages)",
        cli.base_dir.display(),
        summary.csv.len(),
        summary.html.len()
    ));
    println!();

    for report in &summary.csv {
        print_csv_report(report);
        println!();
    }

    println!("{}", "Checking HTML Files:".bold());
    for report in &summary.html {
        if report.present {
            println!("{} {}", "✓".green().bold(), report.name);
        } else {
            println!("{} {} - {}", "✗".red().bold(), report.name, "Missing".red());
        }
    }

    let (passed_count, failed_count) = summary.counts(cli.strict_columns);
    println!();
    console.print_separator();
    println!(
        "Summary: {} passed, {} failed",
        passed_count.to_string().green(),
        failed_count.to_string().red()
    );

    println!();
    if passed {
        console.success("All validations passed!");
    } else {
        console.error("Some validations failed!");
    }
}

fn print_csv_report(report: &CsvReport) {
    match &report.outcome {
        CsvOutcome::Parsed {
            headers,
            missing,
            rows,
        } => {
            println!("{} {}", "✓".green().bold(), report.path.display());
            println!("  Headers: {}", headers.join(", "));
            if missing.is_empty() {
                println!("  {} All expected columns present", "✓".green());
            } else {
                println!("  Missing columns: {}", missing.join(", ").yellow());
            }
            println!("  Rows: {rows}");
        }
        CsvOutcome::NotFound => {
            println!(
                "{} {} - {}",
                "✗".red().bold(),
                report.path.display(),
                "File not found".red()
            );
        }
        CsvOutcome::Parse { message } => {
            println!(
                "{} {} - {}",
                "✗".red().bold(),
                report.path.display(),
                format!("CSV error: {message}").red()
            );
        }
        CsvOutcome::Io { message } => {
            println!(
                "{} {} - {}",
                "✗".red().bold(),
                report.path.display(),
                format!("Error: {message}").red()
            );
        }
    }
}
