use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tasktracker-{nanos}-{file_name}"))
}

#[test]
fn corrupt_store_halts_add_without_overwriting() {
    let exe = env!("CARGO_BIN_EXE_task_cli");
    let store_path = temp_path("cli-corrupt-add.json");
    std::fs::write(&store_path, "not json").unwrap();

    let output = Command::new(exe)
        .args(["add", "demo"])
        .env("TASKTRACKER_STORE_PATH", &store_path)
        .output()
        .expect("failed to run add command");

    let content = std::fs::read_to_string(&store_path).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: corrupt_store"));
    assert_eq!(content, "not json");
}

#[test]
fn corrupt_store_halts_list() {
    let exe = env!("CARGO_BIN_EXE_task_cli");
    let store_path = temp_path("cli-corrupt-list.json");
    std::fs::write(&store_path, "[{\"id\": 1}]").unwrap();

    let output = Command::new(exe)
        .args(["list"])
        .env("TASKTRACKER_STORE_PATH", &store_path)
        .output()
        .expect("failed to run list command");

    std::fs::remove_file(&store_path).ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: corrupt_store"));
}

#[test]
fn store_survives_a_sequence_of_commands() {
    let exe = env!("CARGO_BIN_EXE_task_cli");
    let store_path = temp_path("cli-sequence.json");

    for args in [
        vec!["add", "buy milk"],
        vec!["add", "write report"],
        vec!["done", "1"],
        vec!["delete", "1"],
    ] {
        let output = Command::new(exe)
            .args(&args)
            .env("TASKTRACKER_STORE_PATH", &store_path)
            .output()
            .expect("failed to run command");
        assert!(output.status.success(), "command {args:?} failed");
    }

    let content = std::fs::read_to_string(&store_path).unwrap();
    std::fs::remove_file(&store_path).ok();

    let stored: serde_json::Value = serde_json::from_str(&content).unwrap();
    let tasks = stored.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], 2);
    assert_eq!(tasks[0]["description"], "write report");
    assert_eq!(tasks[0]["status"], "todo");
}
