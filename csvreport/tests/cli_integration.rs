//! Integration tests for csvreport CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::{tempdir, TempDir};

const PEOPLE: &str = "FirstName,LastName,Address,PhoneNumber
Jimmy,Smith,102 Long Lane,29384857
Clive,Owen,65 Ambling Way,31214788
James,Brown,82 Stewart St,32114566
Graham,Howe,12 Howard St,8766556
John,Howe,78 Short Lane,29384857
Clive,Smith,49 Sutherland St,31214788
James,Owen,8 Crimson Rd,32114566
Graham,Brown,94 Roland St,8766556
";

fn run_csvreport(args: &[&str]) -> (String, String, Option<i32>) {
    let output = Command::new(env!("CARGO_BIN_EXE_csvreport"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (stdout, stderr, output.status.code())
}

/// Temp dir holding `Data.csv` and an empty `Output` directory
fn setup(csv: &str) -> TempDir {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("Data.csv"), csv).unwrap();
    fs::create_dir(temp.path().join("Output")).unwrap();
    temp
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_no_args_prints_usage() {
    let (stdout, _, code) = run_csvreport(&[]);

    assert_eq!(code, Some(10));
    assert!(stdout.contains("csvreport <CSV_FILE> <OUTPUT_DIR>"));
}

#[test]
fn test_help_flags_print_usage() {
    for flag in ["-?", "/?", "\\?"] {
        let (stdout, _, code) = run_csvreport(&[flag]);
        assert_eq!(code, Some(10), "flag {flag}");
        assert!(stdout.contains("<CSV_FILE>"), "flag {flag}");
    }
}

#[test]
fn test_help_flag_before_valid_args() {
    let (_, _, code) = run_csvreport(&["-?", "out"]);
    assert_eq!(code, Some(10));
}

#[test]
fn test_wrong_arg_count() {
    let (stdout, _, code) = run_csvreport(&["only-one.csv"]);
    assert_eq!(code, Some(10));
    assert!(stdout.contains("<OUTPUT_DIR>"));

    let (_, _, code) = run_csvreport(&["a.csv", "out", "extra"]);
    assert_eq!(code, Some(10));
}

#[test]
fn test_version() {
    let (stdout, _, code) = run_csvreport(&["--version"]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("csvreport"));
}

#[test]
fn test_missing_input_file() {
    let temp = setup(PEOPLE);
    let missing = temp.path().join("missing.csv");

    let (_, stderr, code) = run_csvreport(&[
        &path_str(&missing),
        &path_str(&temp.path().join("Output")),
    ]);

    assert_eq!(code, Some(2));
    assert!(stderr.contains("CSV File"));
    assert!(stderr.contains("not found"));
}

#[test]
fn test_directory_as_input_file() {
    let temp = setup(PEOPLE);

    let (_, stderr, code) = run_csvreport(&[
        &path_str(temp.path()),
        &path_str(&temp.path().join("Output")),
    ]);

    assert_eq!(code, Some(2));
    assert!(stderr.contains("CSV File"));
    assert!(stderr.contains("not found"));
}

#[test]
fn test_missing_output_dir() {
    let temp = setup(PEOPLE);

    let (_, stderr, code) = run_csvreport(&[
        &path_str(&temp.path().join("Data.csv")),
        &path_str(&temp.path().join("NoSuchDir")),
    ]);

    assert_eq!(code, Some(7));
    assert!(stderr.contains("Output Path"));
}

#[test]
fn test_missing_input_checked_before_output_dir() {
    let temp = tempdir().unwrap();

    let (_, _, code) = run_csvreport(&[
        &path_str(&temp.path().join("missing.csv")),
        &path_str(&temp.path().join("NoSuchDir")),
    ]);

    assert_eq!(code, Some(2));
}

#[test]
fn test_writes_reports() {
    let temp = setup(PEOPLE);
    let out = temp.path().join("Output");

    let (stdout, _, code) = run_csvreport(&[
        &path_str(&temp.path().join("Data.csv")),
        &path_str(&out),
    ]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Address List.txt"));
    assert_eq!(
        read_lines(&out.join("FirstName And LastName Frequency.txt")),
        vec![
            "Clive, 2", "Graham, 2", "James, 2", "Jimmy, 1", "John, 1", " ", "Brown, 2",
            "Howe, 2", "Owen, 2", "Smith, 2",
        ]
    );
    assert_eq!(
        read_lines(&out.join("Address List.txt")),
        vec![
            "65 Ambling Way",
            "8 Crimson Rd",
            "12 Howard St",
            "102 Long Lane",
            "94 Roland St",
            "78 Short Lane",
            "82 Stewart St",
            "49 Sutherland St",
        ]
    );
}

#[test]
fn test_column_mismatch_fails() {
    let csv = PEOPLE.replace(
        "John,Howe,78 Short Lane,29384857",
        "John,Howe,78 Short Lane,29384857,blahblahblahblahblahblah",
    );
    let temp = setup(&csv);
    let out = temp.path().join("Output");

    let (_, stderr, code) = run_csvreport(&[
        &path_str(&temp.path().join("Data.csv")),
        &path_str(&out),
    ]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("column count mismatch"));
    assert!(stderr.contains("line number 6"));
    assert!(!out.join("Address List.txt").exists());
}

#[test]
fn test_duplicate_street_policy() {
    let csv = "FirstName,LastName,Address,PhoneNumber
Ann,Lee,1 Main St,1
Bob,Ray,2 Main St,2
";
    let temp = setup(csv);
    let data = path_str(&temp.path().join("Data.csv"));
    let out = path_str(&temp.path().join("Output"));

    let (_, stderr, code) = run_csvreport(&[&data, &out]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("duplicate sort key"));

    let (_, stderr, code) = run_csvreport(&[&data, &out, "--duplicate-keys", "reject"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("duplicate sort key"));

    let (_, _, code) = run_csvreport(&[&data, &out, "--duplicate-keys", "bogus"]);
    assert_eq!(code, Some(10));

    let (_, _, code) = run_csvreport(&[&data, &out, "--duplicate-keys", "insertion-order"]);
    assert_eq!(code, Some(0));
    assert_eq!(
        read_lines(&temp.path().join("Output").join("Address List.txt")),
        vec!["1 Main St", "2 Main St"]
    );
}

#[test]
fn test_headerless_input() {
    let headerless = PEOPLE.lines().skip(1).collect::<Vec<_>>().join("\n");
    let temp = setup(&headerless);
    let out = temp.path().join("Output");

    let (_, _, code) = run_csvreport(&[
        &path_str(&temp.path().join("Data.csv")),
        &path_str(&out),
        "--no-header",
        "-F",
        "2",
        "--sort-column",
        "3",
    ]);

    assert_eq!(code, Some(0));
    assert_eq!(
        read_lines(&out.join("FirstName And LastName Frequency.txt")),
        vec!["Brown, 2", "Howe, 2", "Owen, 2", "Smith, 2"]
    );
}

#[test]
fn test_json_output() {
    let temp = setup(PEOPLE);

    let (stdout, _, code) = run_csvreport(&[
        &path_str(&temp.path().join("Data.csv")),
        &path_str(&temp.path().join("Output")),
        "--json",
    ]);

    assert_eq!(code, Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["reports"][0]["name"], "FirstName And LastName Frequency.txt");
    assert_eq!(parsed["reports"][1]["lines"][0], "65 Ambling Way");
    assert_eq!(parsed["written"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["options"]["sort_column"], "Address");
    assert_eq!(parsed["options"]["duplicate_keys"], "Reject");
}
