use std::{fs, io::Write as _, iter};

use junit_formatter::cli::{self, Opts, Parser as _};
use tempfile::{NamedTempFile, TempDir};

fn opts(args: &[&str]) -> Opts {
    Opts::parse_from(iter::once("junit-formatter").chain(args.iter().copied()))
}

#[test]
fn converts_json_report_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("junit.xml");

    let outcome = cli::run(&opts(&[
        "--input",
        "tests/reports/two_packages.json",
        "--output",
        output.to_str().unwrap(),
        "--go-version",
        "go1.21.0",
    ]))
    .unwrap();

    assert_eq!(outcome, cli::Outcome { tests: 4, failures: 2 });
    assert!(!outcome.is_failure(false));
    assert!(outcome.is_failure(true));
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        fs::read_to_string("tests/junit/correct.xml").unwrap(),
    );
}

#[test]
fn failed_conversion_keeps_existing_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("junit.xml");
    fs::write(&output, "<previous/>").unwrap();

    for json in [
        r#"{"packages": []}"#,
        r#"{"packages": [{"name": "single", "time": 0}]}"#,
        r#"{"packages": [{"name": "a/b", "time": 0, "tests": [
            {"name": "TestNul", "time": 0, "result": "FAIL", "output": ["\u0000"]}
        ]}]}"#,
    ] {
        let mut input = NamedTempFile::new().unwrap();
        input.write_all(json.as_bytes()).unwrap();

        let err = cli::run(&opts(&[
            "-i",
            input.path().to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]))
        .unwrap_err();

        assert!(!err.is_io_error(), "unexpected error: {err}");
        assert_eq!(fs::read_to_string(&output).unwrap(), "<previous/>");
    }
}

#[test]
fn reports_empty_report() {
    let mut input = NamedTempFile::new().unwrap();
    input.write_all(br#"{"packages": []}"#).unwrap();

    let err = cli::run(&opts(&["-i", input.path().to_str().unwrap()]))
        .unwrap_err();

    assert!(err.is_empty_report());
}

#[test]
fn reports_undecodable_input() {
    let mut input = NamedTempFile::new().unwrap();
    input.write_all(b"not json").unwrap();

    let err = cli::run(&opts(&["-i", input.path().to_str().unwrap()]))
        .unwrap_err();

    assert!(matches!(err, junit_formatter::Error::Decode(_)));
}

#[test]
fn reports_missing_input() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    let err = cli::run(&opts(&["-i", missing.to_str().unwrap()]))
        .unwrap_err();

    assert!(err.is_io_error());
}
