//! Settings file handling for glyphrain.
//!
//! Settings live in `config.toml` under the platform config directory:
//!
//! ```toml
//! preset = "ocean"
//!
//! [rain]
//! tile-size = 16
//! fade-factor = 0.3
//! ```
//!
//! A preset supplies the base look; any field under `[rain]` overrides it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use glyphrain_core::{Preset, RainConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "glyphrain.log";

/// Errors reading or writing the settings file.
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no home directory found for the settings file")]
    NoConfigDir,
}

/// Individual rain fields that replace the preset's values when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RainOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fade_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tile_set: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
}

impl RainOverrides {
    /// Write every set field into `config`.
    pub fn apply(&self, config: &mut RainConfig) {
        if let Some(tile_size) = self.tile_size {
            config.tile_size = tile_size;
        }
        if let Some(fade_factor) = self.fade_factor {
            config.fade_factor = fade_factor;
        }
        if let Some(color) = &self.background_color {
            config.background_color = color.clone();
        }
        if let Some(color) = &self.font_color {
            config.font_color = color.clone();
        }
        if let Some(color) = &self.glow_color {
            config.glow_color = color.clone();
        }
        if let Some(tiles) = &self.tile_set {
            config.tile_set = Some(tiles.clone());
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
    }

    /// Combine two override sets; fields set in `other` win.
    pub fn merge(self, other: RainOverrides) -> RainOverrides {
        RainOverrides {
            tile_size: other.tile_size.or(self.tile_size),
            fade_factor: other.fade_factor.or(self.fade_factor),
            background_color: other.background_color.or(self.background_color),
            font_color: other.font_color.or(self.font_color),
            glow_color: other.glow_color.or(self.glow_color),
            tile_set: other.tile_set.or(self.tile_set),
            fps: other.fps.or(self.fps),
        }
    }
}

/// Persisted settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Base look.
    pub preset: Preset,
    /// Per-field overrides on top of the preset.
    pub rain: RainOverrides,
}

impl Settings {
    /// `<config dir>/glyphrain/config.toml`.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load_default() -> Result<Self, SettingsError> {
        Self::load(&Self::default_path()?)
    }

    /// Load from `path`. A missing file gives default settings.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings = toml::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Write to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source: io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).map_err(io_err)
    }

    /// The rain configuration these settings describe.
    pub fn resolve(&self) -> RainConfig {
        let mut config = self.preset.config();
        self.rain.apply(&mut config);
        config
    }
}

/// Default log file location, `<data dir>/glyphrain/glyphrain.log`.
pub fn default_log_path() -> Result<PathBuf, SettingsError> {
    project_dirs()
        .map(|dirs| dirs.data_dir().join(LOG_FILE))
        .ok_or(SettingsError::NoConfigDir)
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "glyphrain")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = Settings::load(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.resolve(), RainConfig::default());
    }

    #[test]
    fn test_preset_with_overrides() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "preset = \"ocean\"\n\n[rain]\ntile-size = 16\ntile-set = [\"0\", \"1\"]\n",
        )
        .expect("write");

        let settings = Settings::load(&path).expect("valid settings");
        assert_eq!(settings.preset, Preset::Ocean);

        let config = settings.resolve();
        assert_eq!(config.tile_size, 16);
        assert_eq!(config.background_color, "#000033");
        assert_eq!(
            config.tile_set,
            Some(vec!["0".to_string(), "1".to_string()])
        );
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "preset = \"plaid\"\n").expect("write");
        let err = Settings::load(&path).expect_err("unknown preset");
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let settings = Settings {
            preset: Preset::Amethyst,
            rain: RainOverrides {
                fps: Some(24),
                glow_color: Some("#ffffff".to_string()),
                ..RainOverrides::default()
            },
        };
        settings.save(&path).expect("saved");
        assert_eq!(Settings::load(&path).expect("loaded"), settings);
    }

    #[test]
    fn test_load_default_reads_default_path() {
        let Ok(path) = Settings::default_path() else {
            assert!(matches!(
                Settings::load_default(),
                Err(SettingsError::NoConfigDir)
            ));
            return;
        };
        assert!(path.ends_with(Path::new("glyphrain").join(CONFIG_FILE)));
        if let Ok(expected) = Settings::load(&path) {
            assert_eq!(Settings::load_default().expect("same file"), expected);
        }
    }

    #[test]
    fn test_merge_prefers_other() {
        let file = RainOverrides {
            tile_size: Some(12),
            fps: Some(30),
            ..RainOverrides::default()
        };
        let cli = RainOverrides {
            tile_size: Some(24),
            ..RainOverrides::default()
        };
        let merged = file.merge(cli);
        assert_eq!(merged.tile_size, Some(24));
        assert_eq!(merged.fps, Some(30));
    }
}
