//! Path management for the marbles ledger
//!
//! Provides XDG-compliant resolution of the directory holding the
//! transaction log.
//!
//! ## Path Resolution Order
//!
//! 1. `MARBLES_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/marbles` or `~/.config/marbles`
//! 3. Windows: `%APPDATA%\marbles`

use std::path::PathBuf;

use crate::error::MarbleError;

/// Manages the paths used by the ledger
#[derive(Debug, Clone)]
pub struct MarblePaths {
    /// Base directory for all ledger data
    base_dir: PathBuf,
}

impl MarblePaths {
    /// Create a new MarblePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory can be resolved from the
    /// environment.
    pub fn new() -> Result<Self, MarbleError> {
        let base_dir = if let Ok(custom) = std::env::var("MARBLES_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create MarblePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/marbles/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/marbles/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the transaction log
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), MarbleError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MarbleError::Config(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MarbleError::Config(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MarbleError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME").map(|home| PathBuf::from(home).join(".config"))
        })
        .map_err(|_| {
            MarbleError::Config("Neither XDG_CONFIG_HOME nor HOME is set".into())
        })?;
    Ok(config_base.join("marbles"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MarbleError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MarbleError::Config("APPDATA environment variable not set".into()))?;
    Ok(PathBuf::from(appdata).join("marbles"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MarblePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), &temp_dir.path().to_path_buf());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.ledger_file(),
            temp_dir.path().join("data").join("transactions.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MarblePaths::with_base_dir(temp_dir.path().join("marbles"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }
}
