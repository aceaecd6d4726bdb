use crate::model::CarouselConfig;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "reeltui";
const CATALOG_FILE: &str = "catalog.json";

pub fn config_root() -> Result<PathBuf> {
    if let Ok(override_dir) = env::var("REELTUI_CONFIG_DIR") {
        return Ok(PathBuf::from(override_dir));
    }

    let home = env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .context("neither HOME nor USERPROFILE is set")?;
    Ok(PathBuf::from(home).join(".config").join(APP_DIR))
}

pub fn catalog_path() -> Result<PathBuf> {
    Ok(config_root()?.join(CATALOG_FILE))
}

/// Loads the catalog/config file from the default location, falling back to
/// the built-in defaults when no file exists yet.
pub fn load_config() -> Result<CarouselConfig> {
    let path = catalog_path()?;
    if !path.exists() {
        return Ok(CarouselConfig::default());
    }
    read_config(&path)
}

/// Loads an explicitly named catalog file. Unlike [`load_config`], a missing
/// file is an error here: the caller asked for this one.
pub fn read_config(path: &Path) -> Result<CarouselConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let config: CarouselConfig = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        unsafe {
            env::set_var("REELTUI_CONFIG_DIR", dir.path().to_string_lossy().as_ref());
        }

        let config = load_config().expect("load");
        assert!(config.videos.is_empty());
        assert_eq!(config.clip_seconds, 6);
    }

    #[test]
    fn reads_entries_and_applies_serde_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{
                "videos": [
                    {
                        "url": "https://cdn.example.com/a.mp4",
                        "title": "A",
                        "description": "first",
                        "cta": "go"
                    }
                ]
            }"#,
        )
        .expect("write");

        let config = read_config(&path).expect("read");
        assert_eq!(config.videos.len(), 1);
        assert_eq!(config.videos[0].title, "A");
        assert_eq!(config.clip_seconds, 6);
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("nope.json");
        assert!(read_config(&missing).is_err());
    }
}
