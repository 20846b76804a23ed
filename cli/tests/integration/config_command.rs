//! Integration tests for `list`, `init` and `config`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::cli_tests::switchblade;

#[test]
fn test_list_first_run_creates_sample() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");

    switchblade()
        .arg("--config")
        .arg(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created sample configuration"))
        .stdout(predicate::str::contains("aquamind"))
        .stdout(predicate::str::contains("diagnosure"));
    assert!(path.exists());
}

#[test]
fn test_list_json_is_the_workspace_map() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"web": {"ports": [8080], "urls": ["http://localhost:8080"]}}"#)
        .expect("write");

    let out = switchblade()
        .arg("--config")
        .arg(&path)
        .args(["list", "--json"])
        .output()
        .expect("runs");
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(value["web"]["ports"][0], 8080);
    assert_eq!(value["web"]["apps_to_close"], serde_json::json!([]));
}

#[test]
fn test_list_rejects_broken_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "[1, 2").expect("write");

    switchblade()
        .arg("--config")
        .arg(&path)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot parse"));
}

#[test]
fn test_init_writes_once_unless_forced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"mine": {}}"#).expect("write");

    switchblade()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert!(std::fs::read_to_string(&path).expect("read").contains("mine"));

    switchblade()
        .arg("--config")
        .arg(&path)
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote sample configuration"));
    assert!(std::fs::read_to_string(&path).expect("read").contains("aquamind"));
}

#[test]
fn test_config_path_prints_resolved_location() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.yaml");

    switchblade()
        .env("SWITCHBLADE_CONFIG", &path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.yaml"));
}

#[test]
fn test_config_show_prints_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "api:\n  ports: [3000]\n").expect("write");

    let out = switchblade()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .output()
        .expect("runs");
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(value["api"]["ports"][0], 3000);
}
