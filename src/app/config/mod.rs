// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[toasts]` - Toast display time and transition durations
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `GOBARBER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use gobarber::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toasts.display_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use crate::ui::toast::Tween;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// How long a toast stays on screen without interaction (milliseconds).
    #[serde(default = "default_display_ms", skip_serializing_if = "Option::is_none")]
    pub display_ms: Option<u64>,

    /// Slide-in duration (milliseconds).
    #[serde(default = "default_enter_ms", skip_serializing_if = "Option::is_none")]
    pub enter_ms: Option<u64>,

    /// Slide-out duration (milliseconds).
    #[serde(default = "default_leave_ms", skip_serializing_if = "Option::is_none")]
    pub leave_ms: Option<u64>,

    /// Skip transitions entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduce_motion: Option<bool>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
            enter_ms: default_enter_ms(),
            leave_ms: default_leave_ms(),
            reduce_motion: Some(false),
        }
    }
}

impl ToastConfig {
    /// Display time, clamped to the supported range.
    #[must_use]
    pub fn display_duration(&self) -> Duration {
        let ms = self
            .display_ms
            .unwrap_or(DEFAULT_TOAST_DISPLAY_MS)
            .clamp(MIN_TOAST_DISPLAY_MS, MAX_TOAST_DISPLAY_MS);
        Duration::from_millis(ms)
    }

    /// Builds the animator for toast cards.
    #[must_use]
    pub fn tween(&self) -> Tween {
        if self.reduce_motion.unwrap_or(false) {
            return Tween::immediate();
        }
        let enter = self
            .enter_ms
            .unwrap_or(DEFAULT_TOAST_ENTER_MS)
            .min(MAX_TOAST_TRANSITION_MS);
        let leave = self
            .leave_ms
            .unwrap_or(DEFAULT_TOAST_LEAVE_MS)
            .min(MAX_TOAST_TRANSITION_MS);
        Tween::new(Duration::from_millis(enter), Duration::from_millis(leave))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toasts: ToastConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_display_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DISPLAY_MS)
}

fn default_enter_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_ENTER_MS)
}

fn default_leave_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_LEAVE_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
