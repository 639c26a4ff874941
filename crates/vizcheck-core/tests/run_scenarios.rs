//! End-to-end validation runs over a temporary asset tree

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vizcheck_core::{default_rules, run, CsvOutcome, VizError, HTML_FILES};

/// Lay down a complete, correct asset directory.
fn populate_assets(base: &Path) {
    fs::write(
        base.join("data.csv"),
        "Year,Location,No_of_Participants,Description\n2023,Oslo,120,Winter show\n",
    )
    .unwrap();
    fs::write(
        base.join("vis1_data.csv"),
        "breed,entries,attendees,category,day\ncollie,4,30,herding,1\n",
    )
    .unwrap();
    fs::write(base.join("vis2a_data.csv"), "group,breed,points\n1,collie,12\n").unwrap();
    fs::write(base.join("vis2b_data.csv"), "group,bis,rbis\n1,2,3\n").unwrap();

    for page in HTML_FILES {
        fs::write(base.join(page), "<html></html>").unwrap();
    }
}

#[test]
fn test_complete_asset_tree_passes() {
    let dir = TempDir::new().unwrap();
    populate_assets(dir.path());

    let summary = run(dir.path(), &default_rules(), HTML_FILES).unwrap();
    assert!(summary.passed(false));
    assert!(summary.passed(true));
    assert_eq!(summary.counts(false), (9, 0));
}

#[test]
fn test_missing_primary_dataset_fails_but_checks_continue() {
    let dir = TempDir::new().unwrap();
    populate_assets(dir.path());
    fs::remove_file(dir.path().join("data.csv")).unwrap();

    let summary = run(dir.path(), &default_rules(), HTML_FILES).unwrap();
    assert_eq!(summary.csv[0].outcome, CsvOutcome::NotFound);
    // the remaining checks still ran
    assert_eq!(summary.csv.len(), 4);
    assert!(summary.csv[1..].iter().all(|r| r.readable()));
    assert_eq!(summary.html.len(), HTML_FILES.len());
    assert!(!summary.passed(false));
}

#[test]
fn test_missing_column_is_informational_unless_strict() {
    let dir = TempDir::new().unwrap();
    populate_assets(dir.path());
    // drop the "points" column from vis2a_data.csv
    fs::write(dir.path().join("vis2a_data.csv"), "group,breed\n1,collie\n").unwrap();

    let summary = run(dir.path(), &default_rules(), HTML_FILES).unwrap();
    let report = &summary.csv[2];
    assert!(report.readable());
    match &report.outcome {
        CsvOutcome::Parsed { missing, .. } => assert_eq!(missing, &["points".to_string()]),
        other => panic!("unexpected outcome: {other:?}"),
    }

    assert!(summary.passed(false));
    assert!(!summary.passed(true));
}

#[test]
fn test_missing_page_fails_the_run() {
    let dir = TempDir::new().unwrap();
    populate_assets(dir.path());
    fs::remove_file(dir.path().join("vis3.html")).unwrap();

    let summary = run(dir.path(), &default_rules(), HTML_FILES).unwrap();
    assert!(!summary.passed(false));
    let vis3 = summary.html.iter().find(|r| r.name == "vis3.html").unwrap();
    assert!(!vis3.present);
}

#[test]
fn test_missing_base_dir_is_fatal() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("dep");

    let err = run(&missing, &default_rules(), HTML_FILES).unwrap_err();
    assert!(matches!(err, VizError::MissingBaseDir(_)));
}

#[test]
fn test_row_counts_match_line_counts() {
    let dir = TempDir::new().unwrap();
    populate_assets(dir.path());
    fs::write(
        dir.path().join("data.csv"),
        "Year,Location,No_of_Participants,Description\n\
         2021,Oslo,100,a\n\
         2022,Bergen,110,b\n\
         2023,Oslo,120,c\n",
    )
    .unwrap();

    let summary = run(dir.path(), &default_rules(), HTML_FILES).unwrap();
    match &summary.csv[0].outcome {
        CsvOutcome::Parsed { rows, .. } => assert_eq!(*rows, 3),
        other => panic!("unexpected outcome: {other:?}"),
    }
}
