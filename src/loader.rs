use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::model::{Booking, Hotel};

/// Why a snapshot file could not be loaded. Fatal at startup — without a
/// snapshot there is no session to run.
#[derive(Debug)]
pub enum LoadError {
    UnsupportedExtension(PathBuf),
    Io(PathBuf, std::io::Error),
    Json(PathBuf, serde_json::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::UnsupportedExtension(path) => {
                write!(f, "{}: only .json files are supported", path.display())
            }
            LoadError::Io(path, e) => write!(f, "{}: {e}", path.display()),
            LoadError::Json(path, e) => write!(f, "{}: invalid JSON: {e}", path.display()),
        }
    }
}

impl std::error::Error for LoadError {}

/// Load the hotel inventory snapshot.
pub fn load_hotels(path: &Path) -> Result<Vec<Hotel>, LoadError> {
    read_json(path)
}

/// Load the reservation snapshot.
pub fn load_bookings(path: &Path) -> Result<Vec<Booking>, LoadError> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(LoadError::UnsupportedExtension(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&text).map_err(|e| LoadError::Json(path.to_path_buf(), e))
}
