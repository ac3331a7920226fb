//! Integration tests for the densepath CLI
//!
//! These tests run the densepath binary end to end: demo pipeline,
//! edge-list solving, output formats, and error exit codes.

use std::fs;

use predicates::prelude::*;

mod common;
use common::{densepath, DEMO_EDGE_LIST};

#[test]
fn test_demo_human_output() {
    densepath()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Edges by weight:"))
        .stdout(predicate::str::contains("weight 1: 2 -> 3"))
        .stdout(predicate::str::contains("0 4 2 3"))
        .stdout(predicate::str::contains("INF 0 3 4"))
        .stdout(predicate::str::contains("INF INF INF 0"))
        .stdout(predicate::str::contains("shortest distance 0 -> 3: 3"));
}

#[test]
fn test_demo_edges_sorted_by_weight() {
    let output = densepath().arg("demo").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let weights: Vec<i64> = stdout
        .lines()
        .filter_map(|line| line.trim().strip_prefix("weight "))
        .filter_map(|rest| rest.split(':').next())
        .filter_map(|w| w.parse().ok())
        .collect();
    assert_eq!(weights, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_demo_quiet_suppresses_edge_list() {
    densepath()
        .arg("--quiet")
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Edges by weight:").not())
        .stdout(predicate::str::contains("0 4 2 3"));
}

#[test]
fn test_demo_json_output() {
    let output = densepath()
        .arg("--format")
        .arg("json")
        .arg("demo")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"], 4);
    assert_eq!(json["edges"].as_array().unwrap().len(), 5);
    assert_eq!(json["edges"][0]["weight"], 1);

    let expected = serde_json::json!([
        [0, 4, 2, 3],
        [-1, 0, 3, 4],
        [-1, -1, 0, 1],
        [-1, -1, -1, 0]
    ]);
    assert_eq!(json["distances"], expected);

    assert_eq!(json["queries"][0]["from"], 0);
    assert_eq!(json["queries"][0]["to"], 3);
    assert_eq!(json["queries"][0]["distance"], 3);
}

#[test]
fn test_solve_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edges.txt");
    fs::write(&path, DEMO_EDGE_LIST).unwrap();

    densepath()
        .arg("solve")
        .arg("--file")
        .arg(&path)
        .arg("--query")
        .arg("0,3")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 4 2 3"))
        .stdout(predicate::str::contains("shortest distance 0 -> 3: 3"));
}

#[test]
fn test_solve_from_stdin() {
    densepath()
        .arg("solve")
        .write_stdin("0 1 2\n1 0 7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 2"))
        .stdout(predicate::str::contains("7 0"));
}

#[test]
fn test_solve_explicit_nodes_adds_isolated_rows() {
    let output = densepath()
        .arg("--format")
        .arg("json")
        .arg("solve")
        .arg("--nodes")
        .arg("3")
        .write_stdin("0 1 5\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"], 3);
    assert_eq!(json["distances"][2], serde_json::json!([-1, -1, 0]));
}

#[test]
fn test_solve_query_unreachable() {
    densepath()
        .arg("solve")
        .arg("--query")
        .arg("1,0")
        .write_stdin("0 1 5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("shortest distance 1 -> 0: no path"));
}

#[test]
fn test_solve_malformed_edge_is_data_error() {
    densepath()
        .arg("solve")
        .write_stdin("0 1 4\nnot an edge\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_solve_empty_input_is_data_error() {
    densepath()
        .arg("solve")
        .write_stdin("# only a comment\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("empty edge list"));
}

#[test]
fn test_solve_node_out_of_range_is_usage_error() {
    densepath()
        .arg("solve")
        .arg("--nodes")
        .arg("2")
        .write_stdin("0 5 1\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_solve_query_out_of_range_is_usage_error() {
    densepath()
        .arg("solve")
        .arg("--query")
        .arg("0,9")
        .write_stdin("0 1 1\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_solve_oversized_endpoint_is_usage_error() {
    densepath()
        .arg("solve")
        .write_stdin("0 70000 1\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("encodable range"));
}

#[test]
fn test_json_error_envelope() {
    let output = densepath()
        .arg("--format")
        .arg("json")
        .arg("solve")
        .write_stdin("bogus\n")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "invalid_edge");
}

#[test]
fn test_no_command_is_usage_error() {
    densepath()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no command given"));
}

#[test]
fn test_missing_file_is_failure() {
    densepath()
        .arg("solve")
        .arg("--file")
        .arg("/nonexistent/edges.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}
