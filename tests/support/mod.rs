#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use telepath::{Config, ConfigError};

/// Scratch home for one test: a config file plus a status-store location.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn status_path(&self) -> PathBuf {
        self.dir.path().join("status.txt")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(".telepath.cfg")
    }

    /// Write a config file with the given `[telepath]` body and return its path.
    pub fn write_config(&self, body: &str) -> PathBuf {
        let path = self.config_path();
        fs::write(&path, body).expect("write config");
        path
    }

    /// Parse and validate a config file without `TELEPATH_*` overrides, so
    /// the developer's shell environment never leaks into a test.
    pub fn load_config(&self, path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).expect("read config");
        let source: toml::Table = toml::from_str(&contents).expect("parse config");
        Config::from_table(&source, path)
    }

    /// Write a complete config pointing at `endpoint` and load it.
    pub fn config_for(&self, endpoint: &str) -> Config {
        let path = self.write_config(&format!(
            "[telepath]\nendpoint = {endpoint:?}\nirc_nick = \"clif_h\"\nstatus_filename = {:?}\n",
            self.status_path().to_string_lossy()
        ));
        self.load_config(&path).expect("load config")
    }

    pub fn seed_store(&self, contents: &str) {
        fs::write(self.status_path(), contents).expect("seed status store");
    }

    pub fn store_contents(&self) -> Option<String> {
        fs::read_to_string(self.status_path()).ok()
    }
}
