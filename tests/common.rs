#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use commtrack::config::Config;
use commtrack::session::{Session, StaticPassphrase};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ctk() -> Command {
    cargo_bin_cmd!("commtrack")
}

/// Create a unique, empty test data directory inside the system temp dir
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_commtrack", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).unwrap();
    path.to_string_lossy().to_string()
}

/// Config pointed at a test data directory, defaults everywhere else
pub fn test_config(dir: &str) -> Config {
    Config {
        data_dir: dir.to_string(),
        ..Config::default()
    }
}

/// Seed the data dir through the binary, same as a first run would
pub fn init_seeded(dir: &str) {
    ctk()
        .args(["--data-dir", dir, "--test", "init"])
        .assert()
        .success();
}

pub fn admin_session() -> Session {
    let mut s = Session::new();
    s.login_admin(&StaticPassphrase("pw".to_string()), "pw")
        .unwrap();
    s
}

pub fn guest_session() -> Session {
    let mut s = Session::new();
    s.login_guest();
    s
}
