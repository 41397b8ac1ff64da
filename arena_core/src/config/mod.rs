//! Tunable combat constants and TOML loading

mod constants;

pub use constants::{CritConstants, DamageConstants, GameConstants, HitConstants, HP_PER_CON};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to load or validate constants
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid combat constants: {0}")]
    ValidationError(String),
}

/// Read and deserialize a TOML file
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_toml(&content)
}

/// Deserialize a TOML document
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_names_path() {
        let path = Path::new("/nonexistent/arena/constants.toml");
        let err = load_toml::<GameConstants>(path).unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
        assert!(err.to_string().contains("constants.toml"));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("arena_core_constants_{}.toml", std::process::id()));
        fs::write(&path, "[crit]\nmultiplier = 2.5\n").unwrap();

        let constants = GameConstants::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert!((constants.crit.multiplier - 2.5).abs() < f64::EPSILON);
        assert_eq!(constants.hit, HitConstants::default());
    }
}
