use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Top-level directory scanned for wallpapers.
    pub image_dir: PathBuf,
    /// SQLite catalog location.
    pub db_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Wallpaper backend: "feh" or "swww".
    pub wallpaper: String,
    /// pywal color engine.
    pub color: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            image_dir: dirs::picture_dir()
                .map(|p| p.join("wallpapers"))
                .unwrap_or_else(|| PathBuf::from("~/Pictures/wallpapers")),
            db_path: directories::ProjectDirs::from("com", "seasonwall", "seasonwall")
                .map(|dirs| dirs.data_dir().join("catalog.db"))
                .unwrap_or_else(|| PathBuf::from("seasonwall.db")),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            wallpaper: "feh".to_string(),
            color: "haishoku".to_string(),
        }
    }
}

impl Config {
    /// Return the path to the configuration file.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "seasonwall", "seasonwall")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Load config from file, creating default if missing or corrupt.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let data = fs::read_to_string(&path)?;
            match toml::from_str::<Config>(&data) {
                Ok(config) => Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config at {}: {}",
                        path.display(),
                        e
                    );
                    eprintln!("Using default configuration.");
                    Ok(Config::default())
                }
            }
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save config to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = toml::to_string_pretty(self)?;
        fs::write(&path, data)?;

        Ok(())
    }

    /// Get the image directory, expanding ~ if needed.
    pub fn image_dir(&self) -> PathBuf {
        expand_tilde(&self.catalog.image_dir)
    }

    /// Get the catalog path, expanding ~ if needed.
    pub fn db_path(&self) -> PathBuf {
        expand_tilde(&self.catalog.db_path)
    }
}

fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(path.strip_prefix("~").unwrap_or(path));
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_as_backends() {
        use crate::backend::WallpaperBackend;
        use crate::pywal::ColorBackend;

        let config = Config::default();
        assert!(config.backend.wallpaper.parse::<WallpaperBackend>().is_ok());
        assert!(config.backend.color.parse::<ColorBackend>().is_ok());
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        let path = std::path::Path::new("/var/lib/catalog.db");
        assert_eq!(expand_tilde(path), PathBuf::from("/var/lib/catalog.db"));
    }
}
