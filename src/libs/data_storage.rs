use anyhow::Result;
use std::env;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "trackle";

/// Resolves the per-user data directory where the database lives:
/// `%LOCALAPPDATA%` on Windows, `~/Library/Application Support` on macOS,
/// `~/.local/share` elsewhere, each with a `trackle` subdirectory.
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base = match env::consts::OS {
            "windows" => env::var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => env::var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => env::var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };

        Self {
            base_path: PathBuf::from(base).join(APP_DIR),
        }
    }

    /// Full path for `file_name`, creating the directory on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}
