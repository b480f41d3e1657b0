//! Integration tests for EulerBench
//!
//! These tests drive the `euler` command line end to end against the
//! bundled solutions and resource files.

use clap::Parser;
use eulerbench::{Cli, run_with_cli};

const RESOURCES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../resources");

/// Run `euler <args>` and return what it wrote
fn euler(args: &[&str]) -> anyhow::Result<String> {
    eulerbench::link();
    let tmp = tempfile::tempdir()?;
    let out = tmp.path().join("out.txt");
    let out = out.to_str().unwrap();

    let mut argv = vec!["euler", "--quiet", "--resources-dir", RESOURCES, "-o", out];
    argv.extend_from_slice(args);
    run_with_cli(Cli::try_parse_from(argv)?)?;
    Ok(std::fs::read_to_string(out)?)
}

fn euler_json(args: &[&str]) -> serde_json::Value {
    let mut argv = vec!["--format", "json"];
    argv.extend_from_slice(args);
    let output = euler(&argv).unwrap();
    serde_json::from_str(&output).unwrap()
}

/// Test that every version of a problem runs with default arguments
#[test]
fn test_run_all_versions() {
    let output = euler(&["run", "-p", "1"]).unwrap();
    assert_eq!(
        output,
        "Problem 001 - Multiples of 3 and 5\n\
         \x20 version001 - returned '233168'\n\
         \x20 version002 - returned '233168'\n\
         \x20 version003 - returned '233168'\n\
         \x20 version004 - returned '233168'\n"
    );
}

/// Test that problem arguments after `--` reach the solutions
#[test]
fn test_run_with_problem_args() {
    let output = euler(&["run", "-p", "1", "-v", "2,4", "--", "--number", "10"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "  version002 - returned '23'");
    assert_eq!(lines[2], "  version004 - returned '23'");
}

/// Test that requested but missing versions are reported inline
#[test]
fn test_run_reports_missing_versions() {
    let output = euler(&["run", "-p", "3", "-v", "1..3"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[1], "  version001 - returned '6857'");
    assert_eq!(lines[2], "  version002 - not implemented");
    assert_eq!(lines[3], "  version003 - not implemented");
}

/// Test that problems backed by resource files find them
#[test]
fn test_run_with_resources() {
    let output = euler(&["run", "-p", "8"]).unwrap();
    assert!(output.contains("  version001 - returned '23514624000'\n"));

    let output = euler(&["run", "-p", "11"]).unwrap();
    assert_eq!(output.matches("returned '(89, 94, 97, 87)'").count(), 2);
}

/// Test that a missing resource surfaces as a solution error
#[test]
fn test_missing_resource_aborts_run() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().to_str().unwrap();
    let err = euler(&["--resources-dir", dir, "run", "-p", "8"]).unwrap_err();
    assert!(format!("{err:#}").contains("missing resource"));
}

/// Test the machine-readable run report
#[test]
fn test_run_json_report() {
    let report = euler_json(&["run", "-p", "4", "-v", "1..4"]);

    assert_eq!(report["mode"], "run");
    assert_eq!(report["problem"]["display_name"], "Problem 004 - Largest palindrome product");
    assert_eq!(report["meta"]["config"]["selector"], "1..4");

    let versions = report["versions"].as_array().unwrap();
    assert_eq!(versions.len(), 4);
    for version in &versions[..3] {
        assert_eq!(version["status"], "returned");
        assert_eq!(version["answer"], "[913, 993]");
    }
    assert_eq!(versions[3]["status"], "not_implemented");
    assert_eq!(report["summary"]["executed"], 3);
    assert_eq!(report["summary"]["not_implemented"], 1);
}

/// Test that perf times every iteration and summarizes it
#[test]
fn test_perf_json_report() {
    let report = euler_json(&["perf", "-p", "6", "-c", "5", "--", "--number", "10"]);

    assert_eq!(report["mode"], "perf");
    assert_eq!(report["meta"]["config"]["iterations"], 5);
    assert_eq!(report["meta"]["config"]["args"]["number"], "10");

    let version = &report["versions"][0];
    assert_eq!(version["status"], "timed");
    assert_eq!(version["name"], "Bruteforce");
    let metrics = &version["metrics"];
    assert_eq!(metrics["samples"], 5);
    let min = metrics["min_s"].as_f64().unwrap();
    let max = metrics["max_s"].as_f64().unwrap();
    let total = metrics["total_s"].as_f64().unwrap();
    assert!(min <= max);
    assert!(total >= max);
}

/// Test the human-readable timing block
#[test]
fn test_perf_human_output() {
    let output = euler(&["perf", "-p", "2", "-v", "3", "-c", "2"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "Problem 002 - Even Fibonacci numbers");
    assert_eq!(lines[1], "  Version003 - Brute Force Matrix Math");
    assert!(lines[2].starts_with("    total runtime "));
    assert!(lines[7].starts_with("    standard deviation "));
    assert!(lines[2..8].iter().all(|l| l.ends_with("  seconds")));
}

/// Test that a zero iteration count still times once
#[test]
fn test_perf_count_is_clamped() {
    let report = euler_json(&["perf", "-p", "7", "-c", "0", "--", "--n", "6"]);
    assert_eq!(report["meta"]["config"]["iterations"], 1);
    assert_eq!(report["versions"][0]["metrics"]["samples"], 1);
    assert_eq!(report["versions"][0]["metrics"]["std_dev_s"], 0.0);
}

/// Test the problem listing
#[test]
fn test_info_listing() {
    let output = euler(&["info", "-v"]).unwrap();

    assert!(output.starts_with("\n[Project Euler Solution Implementations]\n\n"));
    assert!(output.contains("Problem 001 - Multiples of 3 and 5\n    Version001 - Brute Force, Iterative\n"));
    assert!(output.contains("Problem 011 - Largest product in a grid\n"));
    assert!(output.contains("    Version002 - Bruteforce (Multithreaded)\n"));
    assert!(!output.contains("WARNING"));
}

/// Test that listing a range marks problems without an implementation
#[test]
fn test_info_range_with_gaps() {
    let output = euler(&["info", "-p", "10..12"]).unwrap();
    assert!(output.contains("Problem 010 - Summation of primes\n"));
    assert!(output.contains("Problem 012 - NOT IMPLEMENTED\n"));
    assert!(!output.contains("Version"));
}

/// Test that invalid requests fail before any version runs
#[test]
fn test_request_errors() {
    let err = euler(&["run", "-p", "99"]).unwrap_err();
    assert!(format!("{err:#}").contains("Problem 099 not implemented"));

    let err = euler(&["run", "-p", "1", "-v", "1..x"]).unwrap_err();
    assert!(format!("{err:#}").contains("1..x"));

    let err = euler(&["info", "-p", "0..4000000000"]).unwrap_err();
    assert!(format!("{err:#}").contains("selects more than 1000000 numbers"));

    let err = euler(&["run", "-p", "1", "--", "--digits", "3"]).unwrap_err();
    assert!(format!("{err:#}").contains("unknown argument `--digits`"));

    let err = euler(&["run", "-p", "1", "--", "--number", "ten"]).unwrap_err();
    assert!(format!("{err:#}").contains("invalid argument `--number`"));
}

/// Test that a solution error aborts the batch
#[test]
fn test_solve_error_aborts() {
    let err = euler(&["run", "-p", "9", "--", "--number", "11"]).unwrap_err();
    assert!(format!("{err:#}").contains("no solution found"));
}
