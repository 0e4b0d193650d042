use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TWO_STROKES: &str = r#"
[[steps]]
action = "start"
x = 10.0
y = 10.0

[[steps]]
action = "move"
x = 20.0
y = 10.0

[[steps]]
action = "end"
x = 30.0
y = 10.0

[[steps]]
action = "mode"
mode = "erase"

[[steps]]
action = "start"
x = 15.0
y = 5.0

[[steps]]
action = "end"
x = 15.0
y = 15.0

[[steps]]
action = "undo"
"#;

fn scribbler_cmd() -> Command {
    Command::cargo_bin("scribbler").expect("binary exists")
}

fn write_script(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("session.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn scribbler_help_prints_usage() {
    scribbler_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand drawing surface with erase compositing and undo/redo",
        ));
}

#[test]
fn replay_requires_script_argument() {
    scribbler_cmd()
        .arg("replay")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_prints_history_summary() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, TWO_STROKES);

    scribbler_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("mode: Erase"))
        .stdout(predicate::str::contains("committed: 1"))
        .stdout(predicate::str::contains("undone: 1"))
        .stdout(predicate::str::contains("#0: 3 commands, width 10.0, Black"));
}

#[test]
fn replay_json_reports_counts() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, TWO_STROKES);

    let output = scribbler_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["replay", "--json"])
        .arg(&script)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["committed"], 1);
    assert_eq!(report["undone"], 1);
    assert_eq!(report["replay"]["pointer_events"], 4);
    assert_eq!(report["replay"]["undos"], 1);
}

#[test]
fn replay_uses_explicit_config_defaults() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, TWO_STROKES);
    let config = temp.path().join("custom.toml");
    std::fs::write(
        &config,
        "[drawing]\ndefault_color = \"red\"\ndefault_width = 4.0\n",
    )
    .unwrap();

    scribbler_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["replay", "--config"])
        .arg(&config)
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("width 4.0, Red"));
}

#[test]
fn replay_rejects_invalid_step() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "[[steps]]\naction = \"width\"\nwidth = -2.0\n");

    scribbler_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("replay")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load replay script"))
        .stderr(predicate::str::contains("Step 0"));
}

#[test]
fn init_config_writes_into_config_home() {
    let temp = TempDir::new().unwrap();

    scribbler_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    assert!(temp.path().join("scribbler").join("config.toml").exists());
}
