//! Path utilities for the application's data directory

use std::path::PathBuf;
use std::sync::OnceLock;

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
/// Has to run before any other path function; later calls are ignored.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if DATA_DIR.set(path.clone()).is_err() {
        tracing::debug!(path = %path.display(), "Data directory already initialized");
    }
}

/// ~/.signup-form, or a relative `.signup-form` when there is no home directory
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".signup-form"))
        .unwrap_or_else(|| PathBuf::from(".signup-form"))
}

pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

pub fn log_file_path() -> PathBuf {
    logs_dir().join("signup-form.log")
}

pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
