use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// A `tasks` invocation isolated from the user's config and environment.
fn tasks(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tasks").unwrap();
    cmd.env_remove("TASKLIST_FILE")
        .env_remove("TASKLIST_DEBUG_LOG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"));
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

fn run_ok(home: &TempDir, file: &Path, args: &[&str]) -> Value {
    let output = tasks(home)
        .arg(file)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = parse_json_output(&output);
    assert!(json["success"].as_bool().unwrap());
    json
}

fn add(home: &TempDir, file: &Path, text: &str, due: &str) -> String {
    let json = if due.is_empty() {
        run_ok(home, file, &["add", "--text", text])
    } else {
        run_ok(home, file, &["add", "--text", text, "--due", due])
    };
    json["data"]["id"].as_str().unwrap().to_string()
}

fn listed_texts(json: &Value) -> Vec<String> {
    json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap().to_string())
        .collect()
}

mod task_tests {
    use super::*;

    #[test]
    fn test_add_writes_plain_array() {
        let home = tempdir().unwrap();
        let file = home.path().join("tasks.json");

        let json = run_ok(&home, &file, &["add", "--text", "  Buy milk ", "--due", "2024-05-01"]);
        assert_eq!(json["data"]["text"], "Buy milk");
        assert_eq!(json["data"]["dueDate"], "2024-05-01");
        assert_eq!(json["data"]["completed"], false);
        assert!(json["api_version"].is_string());

        let stored: Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
        let items = stored.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["text"], "Buy milk");
    }

    #[test]
    fn test_blank_text_fails_and_writes_nothing() {
        let home = tempdir().unwrap();
        let file = home.path().join("tasks.json");

        tasks(&home)
            .arg(&file)
            .args(["add", "--text", "   "])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Please write a task description"));

        assert!(!file.exists());
    }

    #[test]
    fn test_list_sorted_by_due_date() {
        let home = tempdir().unwrap();
        let file = home.path().join("tasks.json");

        add(&home, &file, "A", "2024-01-05");
        add(&home, &file, "B", "2024-01-01");
        add(&home, &file, "Someday", "");

        let asc = run_ok(&home, &file, &["list"]);
        assert_eq!(listed_texts(&asc), vec!["B", "A", "Someday"]);
        assert_eq!(asc["data"]["count"], 3);

        let desc = run_ok(&home, &file, &["list", "--sort", "desc"]);
        assert_eq!(listed_texts(&desc), vec!["Someday", "A", "B"]);
    }

    #[test]
    fn test_toggle_and_filter() {
        let home = tempdir().unwrap();
        let file = home.path().join("tasks.json");

        let x = add(&home, &file, "X", "");
        add(&home, &file, "Y", "");

        let toggled = run_ok(&home, &file, &["toggle", "--id", &x]);
        assert_eq!(toggled["data"]["completed"], true);

        let completed = run_ok(&home, &file, &["list", "--filter", "completed"]);
        assert_eq!(listed_texts(&completed), vec!["X"]);

        let active = run_ok(&home, &file, &["list", "--filter", "active"]);
        assert_eq!(listed_texts(&active), vec!["Y"]);
    }

    #[test]
    fn test_complete_and_reopen_are_explicit() {
        let home = tempdir().unwrap();
        let file = home.path().join("tasks.json");
        let id = add(&home, &file, "Laundry", "");

        for _ in 0..2 {
            let json = run_ok(&home, &file, &["complete", "--id", &id]);
            assert_eq!(json["data"]["completed"], true);
        }

        let json = run_ok(&home, &file, &["reopen", "--id", &id]);
        assert_eq!(json["data"]["completed"], false);
    }

    #[test]
    fn test_delete_then_list_empty() {
        let home = tempdir().unwrap();
        let file = home.path().join("tasks.json");
        let id = add(&home, &file, "Y", "");

        let json = run_ok(&home, &file, &["delete", "--id", &id]);
        assert_eq!(json["data"]["deleted"], id.as_str());

        let list = run_ok(&home, &file, &["list"]);
        assert_eq!(list["data"]["count"], 0);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let home = tempdir().unwrap();
        let file = home.path().join("tasks.json");
        add(&home, &file, "Only", "");

        tasks(&home)
            .arg(&file)
            .args(["delete", "--id", "missing"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Not found: task missing"));

        let list = run_ok(&home, &file, &["list"]);
        assert_eq!(list["data"]["count"], 1);
    }

    #[test]
    fn test_corrupt_file_lists_empty() {
        let home = tempdir().unwrap();
        let file = home.path().join("tasks.json");
        fs::write(&file, "{not json").unwrap();

        let list = run_ok(&home, &file, &["list"]);
        assert_eq!(list["data"]["count"], 0);
    }
}

mod env_tests {
    use super::*;

    #[test]
    fn test_file_from_env_var() {
        let home = tempdir().unwrap();
        let file = home.path().join("from-env.json");

        tasks(&home)
            .env("TASKLIST_FILE", &file)
            .args(["add", "--text", "Via env"])
            .assert()
            .success();

        assert!(fs::read_to_string(&file).unwrap().contains("Via env"));
    }

    #[test]
    fn test_file_from_config() {
        let home = tempdir().unwrap();
        let file = home.path().join("configured.json");
        let config_dir = home.path().join("config").join("tasklist");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("config.toml"),
            format!("data_file = {:?}\n", file.to_str().unwrap()),
        )
        .unwrap();

        tasks(&home)
            .args(["add", "--text", "Via config"])
            .assert()
            .success();

        assert!(fs::read_to_string(&file).unwrap().contains("Via config"));
    }
}

mod seed_tests {
    use super::*;

    #[test]
    fn test_seed_skips_non_empty_store() {
        let home = tempdir().unwrap();
        let file = home.path().join("tasks.json");
        add(&home, &file, "Mine", "");

        let json = run_ok(&home, &file, &["seed"]);
        assert_eq!(json["data"]["status"], "skipped");

        let list = run_ok(&home, &file, &["list"]);
        assert_eq!(listed_texts(&list), vec!["Mine"]);
    }

    #[test]
    fn test_seed_failure_reports_error() {
        let home = tempdir().unwrap();
        let file = home.path().join("tasks.json");
        let config_dir = home.path().join("config").join("tasklist");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("config.toml"),
            "[seed]\nurl = \"http://127.0.0.1:9/todos\"\n",
        )
        .unwrap();

        tasks(&home)
            .arg(&file)
            .arg("seed")
            .assert()
            .failure()
            .stderr(predicate::str::contains("\"success\":false"));

        assert!(!file.exists());
    }
}

#[test]
fn test_completions_bash() {
    let home = tempdir().unwrap();
    tasks(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tasks"));
}
