use std::fs;
use std::path::{Path, PathBuf};

/// Write `contents` as `config.toml` inside `dir`.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}
