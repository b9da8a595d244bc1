#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

#[test]
fn show_prints_filtered_lines() {
	let stdout = run_stdout(&["show", "params.xml", "-p", "P1"]);
	assert_eq!(stdout, "P1: [x] = 2\nP1: [y,1] = 3\n");

	let stdout = run_stdout(&["show", "params.xml", "-p", "P1", "--nonzero"]);
	assert_eq!(stdout, "P1: [x] = 2\nP1: [y,0] = 0\nP1: [y,1] = 3\n");
}

#[test]
fn show_reads_code_file() {
	let codes = fixture_path("codes.txt");
	let stdout = run_stdout(&["show", "params.xml", path_arg(&codes)]);
	assert_eq!(stdout, "P1: [x] = 2\nP1: [y,1] = 3\nMODE: Automatic\n");
}

#[test]
fn show_with_empty_code_file_prints_nothing() {
	let codes = fixture_path("empty_codes.txt");
	assert_eq!(run_stdout(&["show", "params.xml", path_arg(&codes)]), "");
	assert_eq!(run_stdout(&["show", "params.xml", path_arg(&codes), "--all"]), "");
}

#[test]
fn show_without_filter_prints_every_parameter() {
	let stdout = run_stdout(&["show", "params.xml"]);
	assert!(stdout.starts_with("P1: [x] = 2\n"));
	assert!(stdout.contains("GAIN: [1,1] = 100\n"));
	assert!(!stdout.contains("ENABLED"));
}

#[test]
fn show_fails_on_missing_code() {
	let output = run(&["show", "params.xml", "-p", "MISSING"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("Parameter MISSING not found"));
}

#[test]
fn show_names_parameter_that_fails_to_parse() {
	let output = run(&["show", "malformed.xml"]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("Error parsing parameter RAGGED"), "unexpected stderr: {stderr}");
	assert!(output.stdout.is_empty());
}

#[test]
fn list_prints_overview_table() {
	let stdout = run_stdout(&["list", "params.xml"]);
	let mut lines = stdout.lines();
	assert!(lines.next().is_some_and(|line| line.starts_with("path: ")));
	assert_eq!(lines.next(), Some("parameters: 5"));
	assert!(lines.next().is_some_and(|line| line.starts_with("code")));
	assert!(stdout.contains("ENABLED"));
}

#[test]
fn get_resolves_path() {
	let stdout = run_stdout(&["get", "params.xml", "--param", "GAIN", "--path", "0"]);
	assert_eq!(stdout, "GAIN: [0,0] = 1\nGAIN: [0,1] = 0\nGAIN: [0,2] = 12.5\n");
}

#[test]
fn table_renders_fixture_grid() {
	let stdout = run_stdout(&["table", "params.xml", "--param", "GAIN"]);
	assert_eq!(stdout, "1  0    12.5  \n0  100  -3    \n");
}

#[test]
fn table_rejects_non_tabular_parameter() {
	let output = run(&["table", "params.xml", "--param", "P1"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("not a two-dimensional array"));
}

/// Run `paramdoc <command> <fixture> <rest...>`, resolving the fixture name.
fn run(args: &[&str]) -> Output {
	let [command, fixture, rest @ ..] = args else {
		panic!("expected command and fixture name");
	};
	Command::new(env!("CARGO_BIN_EXE_paramdoc"))
		.arg(command)
		.arg(fixture_path(fixture))
		.args(rest)
		.output()
		.expect("command executes")
}

fn run_stdout(args: &[&str]) -> String {
	let output = run(args);
	assert!(output.status.success(), "command should succeed: {}", String::from_utf8_lossy(&output.stderr));
	String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

fn path_arg(path: &Path) -> &str {
	path.to_str().expect("fixture path is utf-8")
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}
