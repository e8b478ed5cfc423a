// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network Settings
//!
//! The user's censorship circumvention choice and the account's own phone
//! number. Changing either only changes which profile is selected; profiles
//! themselves are never rebuilt.

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings store errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Censorship circumvention mode chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CensorshipMode {
    /// Always use a fronted profile for the number's country.
    Enabled,
    /// Always connect directly.
    Disabled,
    /// Front only in countries censored by default.
    #[default]
    Default,
}

impl std::str::FromStr for CensorshipMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "enabled" | "on" => Ok(CensorshipMode::Enabled),
            "disabled" | "off" => Ok(CensorshipMode::Disabled),
            "default" | "auto" => Ok(CensorshipMode::Default),
            other => Err(format!("unknown censorship mode: {}", other)),
        }
    }
}

/// Persisted network settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSettings {
    #[serde(default)]
    pub censorship_mode: CensorshipMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_number: Option<String>,
}

/// Source of the current censorship mode and local phone number.
pub trait SettingsStore: Send + Sync {
    fn censorship_mode(&self) -> Result<CensorshipMode, SettingsError>;

    fn set_censorship_mode(&self, mode: CensorshipMode) -> Result<(), SettingsError>;

    /// The account's own number in international format, if registered.
    fn local_number(&self) -> Result<Option<String>, SettingsError>;

    fn set_local_number(&self, number: Option<&str>) -> Result<(), SettingsError>;
}

/// In-memory settings, for tests and hosts that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemorySettings {
    inner: RwLock<NetworkSettings>,
}

impl MemorySettings {
    pub fn new(settings: NetworkSettings) -> Self {
        MemorySettings {
            inner: RwLock::new(settings),
        }
    }
}

impl SettingsStore for MemorySettings {
    fn censorship_mode(&self) -> Result<CensorshipMode, SettingsError> {
        Ok(self.inner.read().censorship_mode)
    }

    fn set_censorship_mode(&self, mode: CensorshipMode) -> Result<(), SettingsError> {
        self.inner.write().censorship_mode = mode;
        Ok(())
    }

    fn local_number(&self) -> Result<Option<String>, SettingsError> {
        Ok(self.inner.read().local_number.clone())
    }

    fn set_local_number(&self, number: Option<&str>) -> Result<(), SettingsError> {
        self.inner.write().local_number = number.map(str::to_string);
        Ok(())
    }
}

/// Settings persisted as a JSON file.
///
/// A missing file reads as default settings. Writes go to a temp file that
/// is then renamed over the original.
#[derive(Debug)]
pub struct FileSettings {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSettings {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole settings file.
    pub fn load(&self) -> Result<NetworkSettings, SettingsError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(NetworkSettings::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn update(&self, apply: impl FnOnce(&mut NetworkSettings)) -> Result<(), SettingsError> {
        let _guard = self.write_lock.lock();
        let mut settings = self.load()?;
        apply(&mut settings);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&settings)?;
        atomic_write(&self.path, data.as_bytes())?;

        tracing::debug!(path = %self.path.display(), "network settings saved");
        Ok(())
    }
}

impl SettingsStore for FileSettings {
    fn censorship_mode(&self) -> Result<CensorshipMode, SettingsError> {
        Ok(self.load()?.censorship_mode)
    }

    fn set_censorship_mode(&self, mode: CensorshipMode) -> Result<(), SettingsError> {
        self.update(|settings| settings.censorship_mode = mode)
    }

    fn local_number(&self) -> Result<Option<String>, SettingsError> {
        Ok(self.load()?.local_number)
    }

    fn set_local_number(&self, number: Option<&str>) -> Result<(), SettingsError> {
        self.update(|settings| settings.local_number = number.map(str::to_string))
    }
}

/// Atomic file write (write to temp, then rename)
fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, data)?;
    fs::rename(&temp_path, path)
}
