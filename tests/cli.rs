use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn polydraw_cmd() -> Command {
    Command::cargo_bin("polydraw").expect("binary exists")
}

/// Temp dir holding an empty config (so user settings never leak in) and the given script.
fn workspace(script: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("config.toml");
    fs::write(&config, "").expect("write config");
    let script_path = dir.path().join("events.txt");
    fs::write(&script_path, script).expect("write script");
    (dir, config, script_path)
}

#[test]
fn polydraw_help_prints_usage() {
    polydraw_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replay pointer scripts through interactive polyline and triangle tools",
        ));
}

#[test]
fn long_version_includes_build_hash() {
    polydraw_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(concat!(
            "polydraw ",
            env!("CARGO_PKG_VERSION"),
            " ("
        )));
}

#[test]
fn list_tools_prints_registered_names() {
    polydraw_cmd()
        .arg("--list-tools")
        .assert()
        .success()
        .stdout("line\ntriangle\n");
}

#[test]
fn script_is_required_for_replay() {
    polydraw_cmd()
        .args(["--tool", "line"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn triangle_script_closes_loop() {
    let (_dir, config, script) = workspace("down 0 0\ndown 10 0\ndown 10 10\n");

    polydraw_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--tool", "triangle", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("tool: triangle"))
        .stdout(predicate::str::contains("mode: modify"))
        .stdout(predicate::str::contains(
            "vertices: [(0, 0), (10, 0), (10, 10), (0, 0)]",
        ));
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let script = dir.path().join("events.txt");
    fs::write(&script, "down 0 0\ndown 10 0\ndown 10 0\n").expect("write script");

    polydraw_cmd()
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("tool: line"))
        .stdout(predicate::str::contains("mode: modify"))
        .stdout(predicate::str::contains("vertices: [(0, 0), (10, 0)]"));

    assert!(!dir.path().join("config").exists());
}

#[test]
fn polyline_drag_moves_vertex() {
    let (_dir, config, script) = workspace(
        "down 0 0\n\
         down 10 0\n\
         down 10 0   # finish\n\
         down 10 0   # reselect the end vertex\n\
         drag 20 5\n\
         up 20 5\n",
    );

    polydraw_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("tool: line"))
        .stdout(predicate::str::contains("vertices: [(0, 0), (20, 5)]"));
}

#[test]
fn unknown_tool_fails() {
    let (_dir, config, script) = workspace("down 0 0\n");

    polydraw_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--tool", "hexagon", "--script"])
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tool 'hexagon'"));
}

#[test]
fn malformed_script_reports_line() {
    let (_dir, config, script) = workspace("down 0 0\nclick 4 4\n");

    polydraw_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown event 'click'"));
}

#[test]
fn output_writes_png() {
    let (dir, config, script) = workspace("down 5 5\ndown 40 5\ndown 40 40\n");
    let output = dir.path().join("shape.png");

    polydraw_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--tool", "triangle", "--width", "64", "--height", "64", "--script"])
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote"));

    let bytes = fs::read(&output).expect("png written");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn init_config_writes_example_once() {
    let dir = TempDir::new().expect("temp dir");

    polydraw_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let written = dir.path().join("polydraw").join("config.toml");
    let contents = fs::read_to_string(&written).expect("config written");
    assert!(contents.contains("hit_tolerance"));

    polydraw_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
