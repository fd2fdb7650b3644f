//! Directory-backed preset storage.

use crate::preset::{Preset, BUILTIN_PRESETS, DEFAULT_PRESET};
use crate::{Error, Result};
use std::path::{Path, PathBuf};

const PRESET_EXTENSION: &str = "json";

/// Presets stored as `<name>.json` files in one directory.
///
/// Built-in presets are always available. A file with the same name as a built-in
/// (other than Default) overrides it.
#[derive(Debug, Clone)]
pub struct PresetStore {
    dir: PathBuf,
}

impl PresetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<user data dir>/OrbitAudio/Presets`
    pub fn default_dir() -> Result<PathBuf> {
        let base = directories::BaseDirs::new().ok_or(Error::NoPresetDirectory)?;
        Ok(base.data_dir().join("OrbitAudio").join("Presets"))
    }

    /// Store over [`default_dir`](Self::default_dir).
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{PRESET_EXTENSION}"))
    }

    /// Resolve a preset by name.
    ///
    /// Default is always the built-in. Otherwise a readable preset file wins, then a
    /// built-in of that name. A file that cannot be read or parsed is skipped with a
    /// warning.
    pub fn load(&self, name: &str) -> Result<Preset> {
        if name == DEFAULT_PRESET {
            return Ok(Preset::default());
        }
        validate_name(name)?;

        let path = self.path_for(name);
        if path.is_file() {
            match read_preset(&path) {
                Ok(mut preset) => {
                    preset.name = name.to_string();
                    tracing::debug!("Loaded preset '{}' from {}", name, path.display());
                    return Ok(preset);
                }
                Err(e) => {
                    tracing::warn!("Ignoring unreadable preset {}: {}", path.display(), e);
                }
            }
        }

        Preset::builtin(name).ok_or_else(|| Error::UnknownPreset(name.to_string()))
    }

    /// Write `preset` as `<name>.json`, creating the directory if needed.
    pub fn save(&self, name: &str, preset: &Preset) -> Result<PathBuf> {
        if name == DEFAULT_PRESET {
            return Err(Error::ReadOnlyPreset(name.to_string()));
        }
        validate_name(name)?;

        std::fs::create_dir_all(&self.dir)?;

        let mut preset = preset.clone();
        preset.name = name.to_string();
        let path = self.path_for(name);
        std::fs::write(&path, preset.to_json()?)?;

        tracing::info!("Saved preset '{}' to {}", name, path.display());
        Ok(path)
    }

    /// Built-in names in display order, then stored presets sorted by name.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = BUILTIN_PRESETS.iter().map(|s| s.to_string()).collect();

        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(names),
            Err(e) => return Err(e.into()),
        };

        let mut stored: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|e| e.to_str()) == Some(PRESET_EXTENSION)
            })
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .filter(|name| !Preset::is_builtin(name))
            .collect();
        stored.sort();

        names.extend(stored);
        Ok(names)
    }
}

fn read_preset(path: &Path) -> Result<Preset> {
    let json = std::fs::read_to_string(path)?;
    Preset::from_json(&json)
}

fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed != name
        || name.contains(['/', '\\'])
        || name == "."
        || name == ".."
    {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}
