//! Command-line tests for the `picard-parser` binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn picard_parser() -> Command {
    Command::cargo_bin("picard-parser").expect("binary should be built")
}

#[test]
fn test_parse_text_output() {
    picard_parser()
        .arg("parse")
        .arg(data_path("CollectInsertSizeMetrics.picard"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Module: picard.analysis.CollectInsertSizeMetrics",
        ))
        .stdout(predicate::str::contains("INPUT = EXAMPLE_GATTAC_L002.uniques.sorted.bam"))
        .stdout(predicate::str::contains("Histogram (11 bins"));
}

#[test]
fn test_parse_json_output() {
    let output = picard_parser()
        .args(["parse", "--format", "json"])
        .arg(data_path("MeanQualityByCycle.picard"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["module_name"], "picard.analysis.MeanQualityByCycle");
    assert!(json["metrics"].is_null());
    assert_eq!(json["histogram"].as_array().unwrap().len(), 6);
}

#[test]
fn test_parse_tsv_histogram_section() {
    picard_parser()
        .args(["parse", "--format", "tsv", "--section", "histogram"])
        .arg(data_path("CollectInsertSizeMetrics.picard"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("section\tkey\tvalue\n"))
        .stdout(predicate::str::contains("histogram\t28\t4\n"))
        .stdout(predicate::str::contains("metric\t").not());
}

#[test]
fn test_parse_absent_section_fails() {
    picard_parser()
        .args(["parse", "--section", "histogram"])
        .arg(data_path("CollectAlignmentSummaryMetrics.picard"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no histogram section"));
}

#[test]
fn test_parse_from_stdin() {
    let content = std::fs::read_to_string(data_path("MarkDuplicates.picard")).unwrap();

    picard_parser()
        .args(["parse", "-"])
        .write_stdin(content)
        .assert()
        .success()
        .stdout(predicate::str::contains("Module: picard.sam.MarkDuplicates"));
}

#[test]
fn test_parse_malformed_histogram_reports_row() {
    let report = "## banner\n\
                  # picard.analysis.MeanQualityByCycle INPUT=a.bam\n\
                  ## HISTOGRAM\tjava.lang.Integer\n\
                  CYCLE\tMEAN_QUALITY\n\
                  28 abc\n";

    picard_parser()
        .args(["parse", "-"])
        .write_stdin(report)
        .assert()
        .failure()
        .stderr(predicate::str::contains("28 abc"));
}

#[test]
fn test_get_metric() {
    picard_parser()
        .arg("get")
        .arg(data_path("MarkDuplicates.picard"))
        .arg("PERCENT_DUPLICATION")
        .assert()
        .success()
        .stdout("0.125\n");
}

#[test]
fn test_get_missing_metric() {
    picard_parser()
        .arg("get")
        .arg(data_path("CollectInsertSizeMetrics.picard"))
        .arg("NOT_A_METRIC")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Metric 'NOT_A_METRIC' not found"));
}

#[test]
fn test_get_from_report_without_metrics() {
    picard_parser()
        .arg("get")
        .arg(data_path("MeanQualityByCycle.picard"))
        .arg("MEAN_QUALITY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no metrics section"));
}

#[test]
fn test_missing_file() {
    picard_parser()
        .args(["parse", "/nonexistent/report.picard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
