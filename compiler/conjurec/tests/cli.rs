//! End-to-end tests for the `conjurec` command.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::io::Cursor;

use clap::Parser;
use conjurec::{run, Cli, Format, Summary};
use pretty_assertions::assert_eq;

struct Output {
    summary: Summary,
    stdout: String,
    stderr: String,
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let cli = Cli::try_parse_from(std::iter::once("conjurec").chain(args.iter().copied())).unwrap();
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let summary = run(&cli, &mut input, &mut stdout, &mut stderr).unwrap();
    Output {
        summary,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

fn run_args(args: &[&str]) -> Output {
    run_with_stdin(args, "")
}

#[test]
fn prints_canonical_form() {
    let output = run_args(&["map<string,list< any >>", "ns.Foo"]);
    assert_eq!(output.stdout, "map<string, list<any>>\nns.Foo\n");
    assert_eq!(output.summary, Summary { parsed: 2, failed: 0 });
    assert!(output.stderr.is_empty());
}

#[test]
fn reports_errors_with_carets() {
    let output = run_args(&["map<string>", "any"]);
    assert_eq!(output.summary, Summary { parsed: 1, failed: 1 });
    assert_eq!(output.stdout, "any\n");
    assert_eq!(
        output.stderr,
        "error[E1001]: expected `,`, found `>` while parsing a map type\n  |\n1 | map<string>\n  |           ^\n"
    );
}

#[test]
fn reads_stdin_when_no_arguments() {
    let output = run_with_stdin(&[], "list<any>\n\nset<binary>\n");
    assert_eq!(output.stdout, "list<any>\nset<binary>\n");
    assert_eq!(output.summary.parsed, 2);
}

#[test]
fn reads_expressions_from_file() {
    let path = std::env::temp_dir().join(format!("conjurec-cli-{}.txt", std::process::id()));
    std::fs::write(&path, "optional<datetime>\n  \nFoo\n").unwrap();

    let output = run_args(&["--file", path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(output.stdout, "optional<datetime>\nFoo\n");
}

#[test]
fn missing_file_is_an_io_error() {
    let cli = Cli::try_parse_from(["conjurec", "--file", "/nonexistent/conjurec/input.txt"]).unwrap();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let result = run(&cli, &mut Cursor::new(Vec::new()), &mut stdout, &mut stderr);
    assert!(result.unwrap_err().to_string().starts_with("failed to read /nonexistent"));
}

#[test]
fn json_format() {
    let output = run_args(&["--format", "json", "list<ns.Foo>"]);
    let value: serde_json::Value = serde_json::from_str(output.stdout.trim()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "list": { "foreignReference": { "namespace": "ns", "name": "Foo" } }
        })
    );
}

#[test]
fn debug_format() {
    let output = run_args(&["--format", "debug", "any"]);
    assert_eq!(output.stdout, "Primitive(\n    Any,\n)\n");
}

#[test]
fn max_depth_flag_limits_nesting() {
    let output = run_args(&["--max-depth", "1", "list<list<any>>"]);
    assert_eq!(output.summary.failed, 1);
    assert!(output.stderr.starts_with("error[E1006]"), "{}", output.stderr);
}

#[test]
fn trim_flag_allows_surrounding_whitespace() {
    assert_eq!(run_args(&[" any "]).summary.failed, 1);
    assert_eq!(run_args(&["--trim", " any "]).summary.parsed, 1);
}

#[test]
fn stats_follow_parsed_types() {
    let output = run_args(&["--stats", "list<a>", "list<b.C>"]);
    assert_eq!(
        output.stdout,
        "list<a>\nlist<b.C>\n              list  2\n   local reference  1\n foreign reference  1\n             total  4\n"
    );
}

#[test]
fn format_values() {
    let cli = Cli::try_parse_from(["conjurec", "--format", "debug"]).unwrap();
    assert_eq!(cli.format, Format::Debug);
    assert!(Cli::try_parse_from(["conjurec", "--format", "yaml"]).is_err());
}
