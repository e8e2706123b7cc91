// SPDX-License-Identifier: MPL-2.0
//! This module handles banner configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_banner::config::{self, Config, SpringinessSetting};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.springiness = Some(SpringinessSetting::Heavy);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.springiness, Some(SpringinessSetting::Heavy));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::banner::{Behavior, RemovalPolicy};
use crate::domain::banner::{AnimationDuration, AutoDismiss, BannerStyle, Edge, Springiness};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedBanner";

/// Persisted springiness tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpringinessSetting {
    None,
    Slight,
    Heavy,
}

impl From<SpringinessSetting> for Springiness {
    fn from(setting: SpringinessSetting) -> Self {
        match setting {
            SpringinessSetting::None => Springiness::None,
            SpringinessSetting::Slight => Springiness::Slight,
            SpringinessSetting::Heavy => Springiness::Heavy,
        }
    }
}

impl From<Springiness> for SpringinessSetting {
    fn from(springiness: Springiness) -> Self {
        match springiness {
            Springiness::None => SpringinessSetting::None,
            Springiness::Slight => SpringinessSetting::Slight,
            Springiness::Heavy => SpringinessSetting::Heavy,
        }
    }
}

/// Persisted home edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSetting {
    Top,
    Bottom,
}

impl From<EdgeSetting> for Edge {
    fn from(setting: EdgeSetting) -> Self {
        match setting {
            EdgeSetting::Top => Edge::Top,
            EdgeSetting::Bottom => Edge::Bottom,
        }
    }
}

impl From<Edge> for EdgeSetting {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Top => EdgeSetting::Top,
            Edge::Bottom => EdgeSetting::Bottom,
        }
    }
}

/// Persisted registry removal policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalSetting {
    RemoveOnGone,
    Retain,
}

impl From<RemovalSetting> for RemovalPolicy {
    fn from(setting: RemovalSetting) -> Self {
        match setting {
            RemovalSetting::RemoveOnGone => RemovalPolicy::RemoveOnGone,
            RemovalSetting::Retain => RemovalPolicy::Retain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub springiness: Option<SpringinessSetting>,
    #[serde(default)]
    pub edge: Option<EdgeSetting>,
    #[serde(default)]
    pub animation_duration_ms: Option<u32>,
    /// Auto-dismiss delay; absent means banners wait for the user.
    #[serde(default)]
    pub auto_dismiss_secs: Option<u32>,
    #[serde(default)]
    pub dismisses_on_tap: Option<bool>,
    #[serde(default)]
    pub dismisses_on_swipe: Option<bool>,
    #[serde(default)]
    pub removal_policy: Option<RemovalSetting>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            springiness: Some(SpringinessSetting::Slight),
            edge: Some(EdgeSetting::Top),
            animation_duration_ms: Some(DEFAULT_ANIMATION_DURATION_MS),
            auto_dismiss_secs: None,
            dismisses_on_tap: Some(DEFAULT_DISMISSES_ON_TAP),
            dismisses_on_swipe: Some(DEFAULT_DISMISSES_ON_SWIPE),
            removal_policy: Some(RemovalSetting::RemoveOnGone),
        }
    }
}

impl Config {
    /// Behavior for new banners, with out-of-range values clamped.
    #[must_use]
    pub fn behavior(&self) -> Behavior {
        Behavior {
            dismisses_on_tap: self.dismisses_on_tap.unwrap_or(DEFAULT_DISMISSES_ON_TAP),
            dismisses_on_swipe: self
                .dismisses_on_swipe
                .unwrap_or(DEFAULT_DISMISSES_ON_SWIPE),
            auto_dismiss: self
                .auto_dismiss_secs
                .map(|secs| AutoDismiss::from_secs(secs).as_duration()),
            animation_duration: AnimationDuration::from_millis(
                self.animation_duration_ms
                    .unwrap_or(DEFAULT_ANIMATION_DURATION_MS),
            ),
        }
    }

    /// Style for new banners; colors keep their defaults.
    #[must_use]
    pub fn style(&self) -> BannerStyle {
        BannerStyle {
            springiness: self.springiness.map(Into::into).unwrap_or_default(),
            edge: self.edge.map(Into::into).unwrap_or_default(),
            ..BannerStyle::default()
        }
    }

    #[must_use]
    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal_policy.map(Into::into).unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads settings from `path`, falling back to defaults on invalid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
