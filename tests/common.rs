#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary with `HOME`/`APPDATA` pinned to an empty temp dir, so the user's
/// real configuration never leaks into a test.
pub fn fit() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("fitlogger_test_home");
    fs::create_dir_all(&home).expect("create test home");
    fit_in_home(&home)
}

/// Binary running with `home` as its home directory
pub fn fit_in_home(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("fitlogger");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Fresh home dir holding a `fitlogger.conf` with the given YAML
pub fn home_with_config(name: &str, yaml: &str) -> PathBuf {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_fitlogger_home", name));
    fs::remove_dir_all(&home).ok();

    let conf_dir = if cfg!(target_os = "windows") {
        home.join("fitlogger")
    } else {
        home.join(".fitlogger")
    };
    fs::create_dir_all(&conf_dir).expect("create config dir");
    fs::write(conf_dir.join("fitlogger.conf"), yaml).expect("write config");
    home
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fitlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Model artifact path inside the temp dir, removed if it already exists
pub fn temp_model(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_model.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB through the CLI
pub fn init_db(db_path: &str) {
    fit()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a workout through the CLI
pub fn add(db_path: &str, model: &str, workout_type: &str, duration: &str, calories: &str) {
    fit()
        .args([
            "--db",
            db_path,
            "--model",
            model,
            "add",
            workout_type,
            duration,
            calories,
        ])
        .assert()
        .success();
}

/// Data rows of `list` output: those starting with the numeric id
pub fn list_rows(db_path: &str) -> Vec<String> {
    let out = fit()
        .args(["--db", db_path, "list"])
        .output()
        .expect("failed to run list");
    assert!(out.status.success());

    String::from_utf8_lossy(&out.stdout)
        .lines()
        .filter(|l| l.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .map(|l| l.to_string())
        .collect()
}
