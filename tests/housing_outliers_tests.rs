use std::fs::File;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use housing_outliers::{app, Config, Error, Outcome};
use serde_json::value::Value;
use tempfile::{tempdir, TempDir};

/*
 * A trimmed-down California housing table: the last row of `MedInc` and the first row of
 * `AveOccup` are far outside the bulk of their columns.
 */
static HOUSING: &str = "\
MedInc,HouseAge,AveOccup,Ocean,Empty
8.3252,41.0,555.0,NEAR BAY,
8.3014,21.0,2.1098,NEAR BAY,
7.2574,52.0,2.3023,NEAR BAY,
5.6431,52.0,2.4479,NEAR BAY,
3.8462,52.0,2.1815,NEAR BAY,
4.0368,52.0,2.1399,NEAR BAY,
3.6591,52.0,2.1284,NEAR BAY,
3.1200,,1.9885,INLAND,
2.0804,42.0,2.0260,INLAND,
3.6912,52.0,2.1726,INLAND,
3.2031,52.0,2.2637,INLAND,
15.0001,52.0,2.0491,INLAND,
";

fn temp_dir() -> TempDir {
    tempdir().unwrap()
}

fn write_dataset(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("california_housing.csv");
    let mut file = File::create(&path).unwrap();
    file.write_all(HOUSING.as_bytes()).unwrap();
    path
}

fn config(dir: &TempDir) -> Config {
    Config::default()
        .dataset(write_dataset(dir))
        .output_directory(dir.path().join("out"))
        .colored(false)
        .debug(false)
}

fn run(config: &Config, input: &str) -> (Result<Outcome, Error>, String) {
    let mut output = Vec::<u8>::new();
    let outcome = app::run(config, Cursor::new(input.to_owned()), &mut output);

    (outcome, String::from_utf8(output).unwrap())
}

fn verify_file(dir: &Path, path: &str) -> PathBuf {
    let full_path = dir.join(path);
    assert!(
        full_path.is_file(),
        "File {:?} does not exist or is not a file",
        full_path
    );
    let metadata = full_path.metadata().unwrap();
    assert!(metadata.len() > 0);
    full_path
}

fn verify_svg(dir: &Path, path: &str) {
    verify_file(dir, path);
}

fn verify_json(dir: &Path, path: &str) -> Value {
    let full_path = verify_file(dir, path);
    let f = File::open(full_path).unwrap();
    serde_json::from_reader::<File, Value>(f).unwrap()
}

#[test]
fn test_reports_and_plots_outliers() {
    let dir = temp_dir();
    let (outcome, output) = run(&config(&dir), "MedInc\n");

    assert_eq!(
        outcome.unwrap(),
        Outcome::Reported {
            column: "MedInc".to_owned(),
            outliers: 1,
        }
    );
    assert!(output.contains("Available columns: MedInc, HouseAge, AveOccup, Ocean, Empty"));
    assert!(output.contains("Found 1 outliers among 12 rows (8.33%)"));
    assert!(output.contains("11    15.0001\n"));
    assert!(output.contains("Name: MedInc, outliers: 1"));
    assert!(output.contains("Plot saved to "));
    verify_svg(&dir.path().join("out"), "MedInc/outliers.svg");
}

#[test]
fn test_retries_after_unknown_column() {
    let dir = temp_dir();
    let (outcome, output) = run(&config(&dir), "Income\nAveOccup\n");

    assert_eq!(
        outcome.unwrap(),
        Outcome::Reported {
            column: "AveOccup".to_owned(),
            outliers: 1,
        }
    );
    assert_eq!(output.matches("Unknown column name. Try again.").count(), 1);
    assert!(output.contains("0    555.0\n"));
}

#[test]
fn test_missing_values_are_skipped() {
    let dir = temp_dir();
    let (outcome, output) = run(&config(&dir), "HouseAge\n");

    // Q1 = 47, Q3 = 52: only the 21 is below the lower fence at 39.5, the missing row is skipped
    assert_eq!(
        outcome.unwrap(),
        Outcome::Reported {
            column: "HouseAge".to_owned(),
            outliers: 1,
        }
    );
    assert!(output.contains("1    21.0\n"));
}

#[test]
fn test_debug_dump() {
    let dir = temp_dir();
    let config = config(&dir).debug(true);
    let (outcome, _) = run(&config, "MedInc\n");

    assert!(outcome.is_ok());
    let dump = verify_json(&dir.path().join("out"), "MedInc/outliers.json");
    assert_eq!(dump["column"], "MedInc");
    assert_eq!(dump["rows"], 12);
    assert_eq!(dump["outliers"][0]["index"], 11);
}

#[test]
fn test_text_column() {
    let dir = temp_dir();
    let (outcome, output) = run(&config(&dir), "Ocean\n");

    assert_eq!(
        outcome.unwrap(),
        Outcome::NonNumeric {
            column: "Ocean".to_owned()
        }
    );
    assert!(output.ends_with("Column values must be numeric to search for outliers\n"));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_empty_column() {
    let dir = temp_dir();
    let (outcome, output) = run(&config(&dir), "Empty\n");

    assert_eq!(
        outcome.unwrap(),
        Outcome::AllMissing {
            column: "Empty".to_owned()
        }
    );
    assert!(output.ends_with("All values in the selected column are missing\n"));
}

#[test]
fn test_no_outliers() {
    let dir = temp_dir();
    let config = config(&dir).coef(100.);
    let (outcome, output) = run(&config, "MedInc\n");

    assert_eq!(
        outcome.unwrap(),
        Outcome::NoOutliers {
            column: "MedInc".to_owned()
        }
    );
    assert!(output.ends_with("No outliers found\n"));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_input_closed() {
    let dir = temp_dir();
    let (outcome, _) = run(&config(&dir), "");

    assert!(matches!(outcome, Err(Error::InputClosed)));
}

#[test]
fn test_missing_dataset() {
    let dir = temp_dir();
    let config = Config::default().dataset(dir.path().join("nope.csv"));
    let (outcome, output) = run(&config, "MedInc\n");

    assert!(matches!(outcome, Err(Error::AccessError { .. })));
    assert!(output.is_empty());
}
