#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::process::{Child, Stdio};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

const ENV_KEYS: [&str; 8] = [
    "RUST_LOG",
    "TODO_BACKEND",
    "TODO_DATA_FILE",
    "TODO_STORAGE_FILE",
    "TODO_STORAGE_KEY",
    "TODO_SEED_URL",
    "TODO_BIND",
    "TODO_PORT",
];

fn todo_cmd(temp: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("todo"));
    for key in ENV_KEYS {
        cmd.env_remove(key);
    }
    cmd.env("NO_COLOR", "1")
        .arg("--config")
        .arg(temp.join("todo.toml"));
    cmd
}

fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// A `todo serve` child process, killed on drop.
struct Server {
    child: Child,
    url: String,
}

impl Server {
    fn start(temp: &Path, extra: &[&str]) -> Self {
        let port = free_port();
        let port_arg = port.to_string();
        let mut args = vec!["--port", port_arg.as_str()];
        args.extend_from_slice(extra);
        Self::launch(temp, &[], &args, port)
    }

    /// Runs `todo serve <args>` with `envs` set and waits for `port` to accept.
    fn launch(temp: &Path, envs: &[(&str, &str)], args: &[&str], port: u16) -> Self {
        let mut cmd = std::process::Command::new(cargo_bin("todo"));
        for key in ENV_KEYS {
            cmd.env_remove(key);
        }
        let child = cmd
            .envs(envs.iter().copied())
            .arg("--config")
            .arg(temp.join("todo.toml"))
            .arg("serve")
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .unwrap();

        let server = Server {
            child,
            url: format!("http://127.0.0.1:{}", port),
        };
        for _ in 0..100 {
            if TcpStream::connect(("127.0.0.1", port)).is_ok() {
                return server;
            }
            thread::sleep(Duration::from_millis(50));
        }
        panic!("server did not start on port {}", port);
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn data_file(temp: &Path) -> PathBuf {
    temp.join("data").join("todos.json")
}

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    todo_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("--url"));
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    todo_cmd(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_add_without_title_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    todo_cmd(temp.path()).arg("add").assert().failure();
}

#[test]
fn test_unreachable_server_fails_with_error() {
    let temp = TempDir::new().unwrap();
    let port = free_port();
    todo_cmd(temp.path())
        .args(["--url", &format!("http://127.0.0.1:{}", port), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_invalid_config_file_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("todo.toml"), "backend = \"cloud\"\n").unwrap();
    todo_cmd(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn test_full_workflow_against_file_backend() {
    let temp = TempDir::new().unwrap();
    let data = data_file(temp.path());
    let server = Server::start(temp.path(), &["--data-file", data.to_str().unwrap()]);
    let url = server.url.as_str();

    todo_cmd(temp.path())
        .args(["--url", url, "add", "Buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added #1"));

    todo_cmd(temp.path())
        .args(["--url", url, "add", "Walk dog", "--user-id", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added #2"));

    todo_cmd(temp.path())
        .args(["--url", url, "done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] Buy milk"));

    todo_cmd(temp.path())
        .args(["--url", url, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("   2. [ ] Walk dog @2"))
        .stdout(predicate::str::contains("   1. [x] Buy milk"))
        .stdout(predicate::str::contains("2 todos, 1 completed"));

    todo_cmd(temp.path())
        .args(["--url", url, "edit", "2", "--title", "Walk the dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Walk the dog"));

    todo_cmd(temp.path())
        .args(["--url", url, "rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted #1"));

    todo_cmd(temp.path())
        .args(["--url", url, "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch todo"));

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&data).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        serde_json::json!([
            {"id": 2, "title": "Walk the dog", "completed": false, "userId": 2}
        ])
    );
}

#[test]
fn test_list_json_output() {
    let temp = TempDir::new().unwrap();
    let data = data_file(temp.path());
    fs::create_dir_all(data.parent().unwrap()).unwrap();
    fs::write(
        &data,
        r#"[{"id": 5, "title": "Existing", "completed": false, "userId": 1}]"#,
    )
    .unwrap();
    let server = Server::start(temp.path(), &["--data-file", data.to_str().unwrap()]);

    let output = todo_cmd(temp.path())
        .args(["--url", &server.url, "list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let todos: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(todos[0]["id"], 5);
    assert_eq!(todos[0]["title"], "Existing");
}

#[test]
fn test_local_backend_workflow() {
    let temp = TempDir::new().unwrap();
    let storage = temp.path().join("local-storage.json");
    let server = Server::start(
        temp.path(),
        &["--backend", "local", "--storage-file", storage.to_str().unwrap()],
    );

    todo_cmd(temp.path())
        .args(["--url", &server.url, "add", "Stored locally"])
        .assert()
        .success();

    let items: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&storage).unwrap()).unwrap();
    let slot = items["todos"].as_str().unwrap();
    assert!(slot.contains("\"title\":\"Stored locally\""));
}

#[test]
fn test_edit_without_fields_fails() {
    let temp = TempDir::new().unwrap();
    todo_cmd(temp.path())
        .args(["--url", "http://127.0.0.1:9", "edit", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_env_beats_config_file_and_flags_beat_env() {
    let temp = TempDir::new().unwrap();
    let file_port = free_port();
    let env_port = free_port();
    let file_data = temp.path().join("from-file.json");
    let env_data = temp.path().join("from-env.json");
    fs::write(
        temp.path().join("todo.toml"),
        format!(
            "port = {}\ndata_file = {:?}\n",
            file_port,
            file_data.to_str().unwrap()
        ),
    )
    .unwrap();

    let env_port_arg = env_port.to_string();
    let envs = [
        ("TODO_PORT", env_port_arg.as_str()),
        ("TODO_DATA_FILE", env_data.to_str().unwrap()),
    ];

    {
        let _server = Server::launch(temp.path(), &envs, &[], env_port);

        // The client resolves its server url through the same layering.
        todo_cmd(temp.path())
            .env("TODO_PORT", &env_port_arg)
            .args(["add", "From env"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added #1"));
    }
    assert!(env_data.exists());
    assert!(!file_data.exists());

    let flag_port = free_port();
    let flag_port_arg = flag_port.to_string();
    let server = Server::launch(temp.path(), &envs, &["--port", &flag_port_arg], flag_port);
    todo_cmd(temp.path())
        .args(["--url", &server.url, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("From env"));
}
