use std::fs;
use std::path::PathBuf;

use crate::WindowResult;

/// Returns the path to the Bolsillo data directory.
///
/// On Windows: `%LOCALAPPDATA%\bolsillo`
/// Creates the directory if it doesn't exist.
pub fn data_dir() -> WindowResult<PathBuf> {
    // LOCALAPPDATA is the standard location for per-user application data
    // on Windows (e.g. C:\Users\username\AppData\Local).
    let base =
        std::env::var("LOCALAPPDATA").map_err(|_| "LOCALAPPDATA environment variable not set")?;

    let dir = PathBuf::from(base).join("bolsillo");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
