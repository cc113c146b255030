//! CLI integration tests
//!
//! Run the built binary against a temporary database and check what a
//! terminal user would see.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn db_path(&self) -> PathBuf {
        self.dir.path().join("snippets.db")
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("snippets.log")
    }

    fn run(&self, args: &[&str]) -> Output {
        let cli_bin = env!("CARGO_BIN_EXE_snippets-cli");
        Command::new(cli_bin)
            .current_dir(self.dir.path())
            .env_remove("SNIPPETS_DB")
            .env_remove("SNIPPETS_LOG_FILE")
            .env_remove("SNIPPETS_LOG_FORMAT")
            .env_remove("RUST_LOG")
            .args(args)
            .arg("--db")
            .arg(self.db_path())
            .arg("--log-file")
            .arg(self.log_path())
            .output()
            .expect("Failed to execute CLI")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "CLI command {:?} should succeed. Stderr: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }
}

fn row_count(db_path: &Path) -> i64 {
    let conn = Connection::open(db_path).unwrap();
    conn.query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn test_put_then_get() {
    let ws = Workspace::new();

    let stdout = ws.run_ok(&["put", "greeting", "hello world"]);
    assert_eq!(stdout, "Stored \"hello world\" as \"greeting\"\n");

    let stdout = ws.run_ok(&["get", "greeting"]);
    assert_eq!(stdout, "Retrieved snippet: \"hello world\"\n");
}

#[test]
fn test_put_twice_overwrites() {
    let ws = Workspace::new();

    ws.run_ok(&["put", "k", "first"]);
    ws.run_ok(&["put", "k", "second"]);

    assert_eq!(ws.run_ok(&["get", "k"]), "Retrieved snippet: \"second\"\n");
    assert_eq!(row_count(&ws.db_path()), 1);
}

#[test]
fn test_get_missing_prints_not_found_and_succeeds() {
    let ws = Workspace::new();

    let stdout = ws.run_ok(&["get", "nonexistent-xyz"]);

    assert_eq!(stdout, "404: Snippet Not Found\n");
}

#[test]
fn test_catalog_lists_sorted_keywords() {
    let ws = Workspace::new();
    ws.run_ok(&["put", "banana", "x"]);
    ws.run_ok(&["put", "apple", "y"]);
    ws.run_ok(&["put", "cherry", "z"]);

    let stdout = ws.run_ok(&["catalog"]);

    assert_eq!(stdout, "Keywords:\napple\nbanana\ncherry\n");
}

#[test]
fn test_catalog_empty() {
    let ws = Workspace::new();

    assert_eq!(ws.run_ok(&["catalog"]), "404: No Keywords Found\n");
}

#[test]
fn test_search_prints_matching_messages() {
    let ws = Workspace::new();
    ws.run_ok(&["put", "a", "hello world"]);
    ws.run_ok(&["put", "b", "goodbye"]);

    assert_eq!(ws.run_ok(&["search", "o"]), "Snippets:\nhello world\ngoodbye\n");
    assert_eq!(ws.run_ok(&["search", "%"]), "404: No Messages Found\n");
}

#[test]
fn test_remove_fails_with_not_implemented() {
    let ws = Workspace::new();
    ws.run_ok(&["put", "keep", "me"]);

    let output = ws.run(&["remove", "keep"]);

    assert!(!output.status.success(), "remove must not report success");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("ERR_NOT_IMPLEMENTED"),
        "Unexpected stderr: {}",
        stderr
    );
    assert_eq!(row_count(&ws.db_path()), 1);
}

#[test]
fn test_json_output() {
    let ws = Workspace::new();
    ws.run_ok(&["put", "k", "v"]);

    let found: serde_json::Value =
        serde_json::from_str(&ws.run_ok(&["get", "k", "--json"])).unwrap();
    assert_eq!(found, serde_json::json!({ "status": "found", "value": "v" }));

    let missing: serde_json::Value =
        serde_json::from_str(&ws.run_ok(&["search", "zzz", "--json"])).unwrap();
    assert_eq!(missing, serde_json::json!({ "status": "not_found" }));
}

#[test]
fn test_logs_go_to_log_file_not_stdout() {
    let ws = Workspace::new();

    let stdout = ws.run_ok(&["put", "logged", "entry"]);

    assert!(!stdout.contains("op="), "Logs leaked to stdout: {}", stdout);
    let log = std::fs::read_to_string(ws.log_path()).unwrap();
    assert!(log.contains("logged"), "Log file should mention the keyword");
}

#[test]
fn test_db_path_from_environment() {
    let ws = Workspace::new();
    let env_db = ws.dir.path().join("from-env.db");
    let cli_bin = env!("CARGO_BIN_EXE_snippets-cli");

    let output = Command::new(cli_bin)
        .current_dir(ws.dir.path())
        .env("SNIPPETS_DB", &env_db)
        .env("SNIPPETS_LOG_FILE", ws.log_path())
        .args(["put", "k", "v"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(row_count(&env_db), 1);
}

#[test]
fn test_unusable_database_exits_nonzero() {
    let ws = Workspace::new();
    std::fs::write(ws.db_path(), b"this is not a sqlite database, just text padding it out")
        .unwrap();

    let output = ws.run(&["catalog"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}

#[test]
fn test_unwritable_log_file_does_not_block_commands() {
    let ws = Workspace::new();
    let blocker = ws.dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();
    let cli_bin = env!("CARGO_BIN_EXE_snippets-cli");

    let run = |args: &[&str]| {
        Command::new(cli_bin)
            .current_dir(ws.dir.path())
            .env_remove("SNIPPETS_LOG_FORMAT")
            .env_remove("RUST_LOG")
            .args(args)
            .arg("--db")
            .arg(ws.db_path())
            .arg("--log-file")
            .arg(blocker.join("snippets.log"))
            .output()
            .unwrap()
    };

    assert!(run(&["put", "k", "v"]).status.success());
    let output = run(&["get", "k"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Retrieved snippet: \"v\"\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Warning: logging disabled"));
}
