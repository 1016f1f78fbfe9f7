//! CLI integration tests for Flash
//!
//! These drive the binary end to end: the stdin shell, one-shot `exec`, the
//! data file it leaves behind and the startup failures.

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory with an empty config file and a data file path
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        Self { dir }
    }

    fn data(&self) -> PathBuf {
        self.dir.path().join("tasks.txt")
    }

    /// Get a command instance for the flash binary, isolated to this sandbox
    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("flash"));
        cmd.env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.dir.path().join("config.toml"))
            .arg("--data")
            .arg(self.data());
        cmd
    }

    fn exec(&self, line: &str) -> assert_cmd::assert::Assert {
        self.cmd()
            .arg("exec")
            .args(line.split_whitespace())
            .assert()
    }
}

// =============================================================================
// Shell Tests
// =============================================================================

#[test]
fn test_shell_greets_and_says_bye() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hey! I'm Flash"))
        .stdout(predicate::str::contains("Bye. Hope to see ya again soon!"));
}

#[test]
fn test_shell_frames_replies() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .arg("shell")
        .write_stdin("todo read book\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("    {}", "_".repeat(42))))
        .stdout(predicate::str::contains("    Got it. I've added this task:"))
        .stdout(predicate::str::contains("      [T][ ] read book"));
}

#[test]
fn test_shell_keeps_going_after_errors() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .write_stdin("blah\ndelete 1\nevent meeting /from 18:00 /to 16:00 /on 2020-12-10\ntodo a\nlist\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("don't know what that means"))
        .stdout(predicate::str::contains("There is no task 1"))
        .stdout(predicate::str::contains("after the end time"))
        .stdout(predicate::str::contains("1.[T][ ] a"));
}

#[test]
fn test_shell_ignores_lines_after_bye() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .write_stdin("todo a\nbye\ntodo b\n")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(sandbox.data()).unwrap(), "T | 0 | a\n");
}

#[test]
fn test_shell_ends_at_end_of_input() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .write_stdin("todo a\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye.").not());
}

#[test]
fn test_shell_json_format() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["--format", "json"])
        .write_stdin("mark 3\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""style":"error-label""#))
        .stdout(predicate::str::contains(r#""exit":true"#));
}

// =============================================================================
// Exec Tests
// =============================================================================

#[test]
fn test_exec_persists_between_runs() {
    let sandbox = Sandbox::new();

    sandbox.exec("todo read book").success();
    sandbox.exec("deadline return book /by 2/12/2019 1800").success();
    sandbox.exec("event buy cake /from 16:00 /to 18:00 /on 10/12/2020").success();
    sandbox.exec("mark 2").success();

    sandbox
        .exec("list")
        .success()
        .stdout(predicate::str::contains("1.[T][ ] read book"))
        .stdout(predicate::str::contains(
            "2.[D][X] return book (by: Dec 02 2019, 6:00 pm)",
        ))
        .stdout(predicate::str::contains(
            "3.[E][ ] buy cake (from: 4:00 pm to: 6:00 pm on: Dec 10 2020)",
        ));

    assert_eq!(
        fs::read_to_string(sandbox.data()).unwrap(),
        "T | 0 | read book\n\
         D | 1 | 2019-12-02 18:00 | return book\n\
         E | 0 | 16:00 | 18:00 | 2020-12-10 | buy cake\n"
    );
}

#[test]
fn test_exec_keeps_unparsed_dates_verbatim() {
    let sandbox = Sandbox::new();

    sandbox.exec("deadline return book /by next sunday").success();

    sandbox
        .exec("list")
        .success()
        .stdout(predicate::str::contains("(by: next sunday)"));
}

#[test]
fn test_exec_line_break_in_description_keeps_file_readable() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["exec", "todo first\nsecond"])
        .assert()
        .success();
    sandbox.exec("todo third").success();

    assert_eq!(
        fs::read_to_string(sandbox.data()).unwrap(),
        "T | 0 | first\\nsecond\nT | 0 | third\n"
    );

    sandbox
        .exec("list")
        .success()
        .stdout(predicate::str::contains("2.[T][ ] third"));
}

#[test]
fn test_exec_error_reply_fails() {
    let sandbox = Sandbox::new();

    sandbox
        .exec("delete 1")
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: OOPS!!! There is no task 1"));

    assert!(!sandbox.data().exists());
}

#[test]
fn test_exec_unknown_verb_fails() {
    let sandbox = Sandbox::new();

    sandbox
        .exec("dance")
        .failure()
        .stderr(predicate::str::contains("don't know what that means"));
}

#[test]
fn test_exec_due_and_reschedule() {
    let sandbox = Sandbox::new();

    sandbox.exec("deadline return book /by 2019-12-02").success();
    sandbox.exec("event meeting /from 14:00 /to 15:00 /on 2019-12-03").success();
    sandbox.exec("reschedule 2 /from 09:00 /to 10:00 /on 2019-12-02").success();

    sandbox
        .exec("due 2/12/2019")
        .success()
        .stdout(predicate::str::contains("Here are the tasks due on Dec 02 2019:"))
        .stdout(predicate::str::contains("1.[D][ ] return book (by: Dec 02 2019)"))
        .stdout(predicate::str::contains(
            "2.[E][ ] meeting (from: 9:00 am to: 10:00 am on: Dec 02 2019)",
        ));

    sandbox
        .exec("reschedule 1 /from 09:00 /to 10:00 /on 2019-12-02")
        .failure()
        .stderr(predicate::str::contains("is a deadline"));
}

#[test]
fn test_exec_json_error_goes_to_stdout_too() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["--format", "json", "exec", "mark", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""kind":"error""#));
}

// =============================================================================
// Configuration and Startup Tests
// =============================================================================

#[test]
fn test_data_path_from_environment() {
    let sandbox = Sandbox::new();
    let data = sandbox.dir.path().join("from-env.txt");

    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("flash"))
        .env("FLASH_DATA", &data)
        .env("FLASH_CONFIG", sandbox.dir.path().join("config.toml"))
        .args(["exec", "todo", "from", "env"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&data).unwrap(), "T | 0 | from env\n");
}

#[test]
fn test_config_sets_name_and_storage() {
    let sandbox = Sandbox::new();
    let data = sandbox.dir.path().join("configured.txt");
    let config = sandbox.dir.path().join("custom.toml");
    fs::write(
        &config,
        format!(
            "[storage]\npath = {:?}\n\n[display]\nname = \"Zap\"\ndivider = \"----\"\n",
            data.display().to_string()
        ),
    )
    .unwrap();

    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("flash"))
        .env_remove("FLASH_DATA")
        .arg("--config")
        .arg(&config)
        .write_stdin("todo a\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hey! I'm Zap"))
        .stdout(predicate::str::contains("    ----"));

    assert!(data.exists());
}

#[test]
fn test_missing_config_file_fails() {
    let sandbox = Sandbox::new();

    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("flash"))
        .arg("--config")
        .arg(sandbox.dir.path().join("nope.toml"))
        .args(["exec", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_corrupt_data_file_fails_at_startup() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.data(), "T | 0 | fine\nZ | 0 | broken\n").unwrap();

    sandbox
        .exec("list")
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .arg("--verbose")
        .args(["exec", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your list is empty."))
        .stderr(predicate::str::contains("opened task file"));
}
