#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use ragenda::core::store::EventStore;
use ragenda::models::event::EventFields;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Isolated HOME so no real configuration file is read.
pub fn test_home() -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("ragenda_test_home");
    fs::create_dir_all(&path).ok();
    path
}

pub fn rag() -> Command {
    rag_in(&test_home())
}

/// Same as `rag()` but with its own HOME, for tests that write a config file.
pub fn rag_in(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("ragenda");
    cmd.env("HOME", home);
    cmd
}

/// Fresh HOME with `~/.ragenda/ragenda.conf` holding `yaml`.
pub fn home_with_config(name: &str, yaml: &str) -> PathBuf {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_ragenda_home", name));
    fs::remove_dir_all(&home).ok();

    let dir = home.join(".ragenda");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("ragenda.conf"), yaml).expect("write config");
    home
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ragenda.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh store on a fresh file; returns the path too for raw SQL access.
pub fn open_store(name: &str) -> (EventStore, String) {
    let db_path = setup_test_db(name);
    let store = EventStore::open(&db_path).expect("open store");
    (store, db_path)
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("time")
}

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").expect("datetime")
}

pub fn event(title: &str, date: &str, start: &str, end: &str) -> EventFields {
    EventFields::new(title, d(date), t(start), t(end))
}

/// Init the DB through the CLI (test mode: no config file is written)
pub fn init_db(db_path: &str) {
    rag()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
