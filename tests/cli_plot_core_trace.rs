use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "core-trace-plot-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plot_core_trace"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run plot_core_trace")
}

#[test]
fn plot_core_trace_writes_svg_next_to_default_input() {
    let dir = unique_temp_dir("default-input");
    write_file(
        &dir,
        "core_trace.txt",
        "Core 0: [T1, T1, T1, T1, T2, T2, T3, T3]\nCore 1: [T2, T2, T2, T1, T1, T1, T1]\n",
    );

    let output = run(&dir, &["--quiet"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let svg = fs::read_to_string(dir.join("core_trace.svg")).expect("read svg");
    assert!(svg.contains(">Core 0</text>"));
    assert!(svg.contains(">Core 1</text>"));
    assert_eq!(svg.matches("<title>").count(), 5);
}

#[test]
fn plot_core_trace_honours_output_and_title() {
    let dir = unique_temp_dir("explicit-output");
    let input = write_file(&dir, "trace.txt", "cpu0: ['A', \"B\", B]\n");
    let out = dir.join("chart.svg");

    let output = run(
        &dir,
        &[
            input.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
            "--title",
            "Round Robin",
        ],
    );
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lanes=1, tasks=2, ticks=3"), "stderr: {stderr}");

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.contains(">Round Robin</text>"));
    assert!(svg.contains(">A</text>"));
    assert!(svg.contains(">B</text>"));
}

#[test]
fn plot_core_trace_exits_1_when_no_valid_lines() {
    let dir = unique_temp_dir("no-lanes");
    write_file(&dir, "core_trace.txt", "\n\ngarbage text\nCore 2: T1, T2\n");

    let output = run(&dir, &["--quiet"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No valid lines found in input"));
    assert!(!dir.join("core_trace.svg").exists());
}

#[test]
fn plot_core_trace_reports_missing_input() {
    let dir = unique_temp_dir("missing");

    let output = run(&dir, &["--quiet", "nope.txt"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read nope.txt"), "stderr: {stderr}");
}

#[test]
fn plot_core_trace_does_not_overwrite_svg_named_input() {
    let dir = unique_temp_dir("svg-input");
    let trace = "Core 0: [T1, T1, T2]\n";
    write_file(&dir, "trace.svg", trace);

    let output = run(&dir, &["trace.svg", "--quiet"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let input = fs::read_to_string(dir.join("trace.svg")).expect("read input");
    assert_eq!(input, trace);
    let svg = fs::read_to_string(dir.join("trace.svg.svg")).expect("read svg");
    assert!(svg.contains(">Core 0</text>"));
}
