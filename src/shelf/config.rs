use crate::error::{Result, ShelfError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_STORE_FILENAME: &str = "library.json";
pub const STORE_ENV: &str = "SHELF_STORE";

/// Configuration for shelf, stored in `config.json` in the platform config dir.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Location of the catalog file. Relative paths are taken from the config dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// The configured store path, or `library.json` in `data_dir`.
    pub fn store_path(&self, config_dir: &Path, data_dir: &Path) -> PathBuf {
        match &self.store_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => config_dir.join(path),
            None => data_dir.join(DEFAULT_STORE_FILENAME),
        }
    }
}

/// Pick the store path: explicit flag, then `SHELF_STORE`, then `config.json`,
/// then the platform data dir. The platform dirs are only consulted when
/// neither override is given.
pub fn resolve_store_path(
    cli_store: Option<PathBuf>,
    env_store: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = cli_store.or(env_store) {
        return Ok(path);
    }

    let dirs = ProjectDirs::from("com", "shelf", "shelf").ok_or_else(|| {
        ShelfError::Config("could not determine a home directory; pass --store".to_string())
    })?;
    let config = ShelfConfig::load(dirs.config_dir())?;
    Ok(config.store_path(dirs.config_dir(), dirs.data_dir()))
}

/// `SHELF_STORE`, ignoring an empty value.
pub fn store_from_env() -> Option<PathBuf> {
    std::env::var_os(STORE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert!(config.store_path.is_none());
    }

    #[test]
    fn test_default_store_path_in_data_dir() {
        let config = ShelfConfig::default();
        let path = config.store_path(Path::new("/cfg"), Path::new("/data"));
        assert_eq!(path, PathBuf::from("/data/library.json"));
    }

    #[test]
    fn test_relative_store_path_is_under_config_dir() {
        let config = ShelfConfig {
            store_path: Some(PathBuf::from("books/mine.json")),
        };
        let path = config.store_path(Path::new("/cfg"), Path::new("/data"));
        assert_eq!(path, PathBuf::from("/cfg/books/mine.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_load_store_path() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "store_path": "books/mine.json" }"#,
        )
        .unwrap();

        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.store_path, Some(PathBuf::from("books/mine.json")));
        assert_eq!(
            loaded.store_path(dir.path(), Path::new("/data")),
            dir.path().join("books/mine.json")
        );
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "store_path = 1").unwrap();
        assert!(matches!(
            ShelfConfig::load(dir.path()),
            Err(ShelfError::Serialization(_))
        ));
    }

    #[test]
    fn test_flag_wins_over_env() {
        let path = resolve_store_path(
            Some(PathBuf::from("/flag.json")),
            Some(PathBuf::from("/env.json")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/flag.json"));

        let path = resolve_store_path(None, Some(PathBuf::from("/env.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/env.json"));
    }
}
