//! JSON file helpers for the ~/.dino-run/ directory.

use std::fs;
use std::io;
use std::path::PathBuf;

const DATA_DIR_NAME: &str = ".dino-run";

/// Get the ~/.dino-run/ directory path without touching the filesystem.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

/// Get the full path for a file in ~/.dino-run/, creating the directory if needed.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    let dir = data_dir()?;
    fs::create_dir_all(&dir)?;
    Ok(dir.join(filename))
}

/// Load a JSON file from ~/.dino-run/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match data_dir() {
        Ok(dir) => dir.join(filename),
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("ignoring malformed {}: {}", path.display(), e);
            T::default()
        }),
        Err(_) => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_name() {
        if let Ok(dir) = data_dir() {
            assert!(dir.ends_with(".dino-run"));
        }
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default("nonexistent_test_file_12345.json");
        assert!(val.is_empty());
    }
}
