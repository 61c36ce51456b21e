//! Scalar user preferences.
//!
//! Every setting lives under `setting_<name>` as a JSON-encoded value. Each
//! key defaults independently; there is no cross-key validation.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::KeyValueStore;
use crate::error::{StoreError, ValidationError};

/// Prefix separating settings from other top-level keys.
pub const SETTING_PREFIX: &str = "setting_";

pub const GOAL_SECONDS: &str = "goalSeconds";
pub const DEFAULT_VIEW: &str = "defaultView";
pub const SELECTED_SOUND: &str = "selectedSound";
pub const THEME: &str = "theme";

pub const DEFAULT_GOAL_SECS: u64 = 300;
pub const DEFAULT_SOUND: &str = "/meditation-bell.wav";

/// Built-in alert sounds as (label, asset id).
pub const SOUND_OPTIONS: &[(&str, &str)] = &[
    ("Original Bell", "/meditation-bell.wav"),
    ("Rain", "/sounds/bell-3.mp3"),
    ("Wind Chimes", "/sounds/alex_jauk-wind-chimes-noise-398733.mp3"),
    ("Singing Bell", "/sounds/freesound_community-singing-bell-hit-1-105400.mp3"),
    ("Meditation Bell", "/sounds/freesound_community-bell-meditation-75335.mp3"),
    ("Root Chakra Bell", "/sounds/floraphonic-deep-meditation-bell-hit-root-chakra-8-186974.mp3"),
    ("Sacral Chakra Bell", "/sounds/floraphonic-deep-meditation-bell-hit-sacral-chakra-2-186968.mp3"),
    ("Copper Bell 1", "/sounds/floraphonic-copper-bell-ding-1-172685.mp3"),
    ("Copper Bell 2", "/sounds/floraphonic-copper-bell-ding-23-215438.mp3"),
    ("Copper Bell 3", "/sounds/floraphonic-copper-bell-ding-25-204990.mp3"),
    ("Notification Bell 1", "/sounds/dragon-studio-notification-bell-sound-1-376885.mp3"),
    ("Notification Bell 2", "/sounds/dragon-studio-notification-bell-sound-376888.mp3"),
    ("Door Bell", "/sounds/freesound_community-old-style-door-bell-101191.mp3"),
];

/// Which history view opens first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    #[default]
    List,
    Calendar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Oled,
}

impl FromStr for DefaultView {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "calendar" => Ok(Self::Calendar),
            other => Err(ValidationError::InvalidValue {
                field: DEFAULT_VIEW.into(),
                message: format!("expected 'list' or 'calendar', got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for DefaultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Calendar => "calendar",
        })
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "oled" => Ok(Self::Oled),
            other => Err(ValidationError::InvalidValue {
                field: THEME.into(),
                message: format!("expected 'light', 'dark' or 'oled', got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Oled => "oled",
        })
    }
}

/// Snapshot of every known setting, each resolved independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub goal_seconds: u64,
    pub default_view: DefaultView,
    pub selected_sound: String,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            goal_seconds: DEFAULT_GOAL_SECS,
            default_view: DefaultView::default(),
            selected_sound: DEFAULT_SOUND.to_string(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Read every setting, falling back per key.
    ///
    /// # Errors
    /// Only `Unavailable`; undecodable values fall back to their defaults.
    pub async fn load<S: KeyValueStore + ?Sized>(
        repo: &SettingsRepository<S>,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            goal_seconds: repo.goal_seconds().await?,
            default_view: repo.default_view().await?,
            selected_sound: repo.selected_sound().await?,
            theme: repo.theme().await?,
        })
    }
}

/// Typed access to `setting_*` keys.
///
/// Values are not validated here beyond being JSON; the typed accessors
/// below are the ones that know each setting's shape.
pub struct SettingsRepository<S: ?Sized> {
    store: Arc<S>,
}

impl<S: KeyValueStore + ?Sized> SettingsRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn key(name: &str) -> String {
        format!("{SETTING_PREFIX}{name}")
    }

    /// Decoded value of `name`, or `default` when the key is absent.
    ///
    /// # Errors
    /// `CorruptData` when a stored value does not decode as `T`.
    pub async fn get<T: DeserializeOwned>(&self, name: &str, default: T) -> Result<T, StoreError> {
        let key = Self::key(name);
        match self.store.get(&key).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::corrupt(&key, e)),
            None => Ok(default),
        }
    }

    /// Raw JSON text of `name`, if present.
    pub async fn get_raw(&self, name: &str) -> Result<Option<String>, StoreError> {
        self.store.get(&Self::key(name)).await
    }

    pub async fn set<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        let key = Self::key(name);
        let raw = serde_json::to_string(value).map_err(|e| StoreError::corrupt(&key, e))?;
        self.store.set(&key, &raw).await?;
        tracing::debug!(%key, %raw, "setting updated");
        Ok(())
    }

    /// Store already-encoded JSON text for `name`.
    ///
    /// # Errors
    /// `CorruptData` if `json` is not valid JSON; nothing is written then.
    pub async fn set_raw(&self, name: &str, json: &str) -> Result<(), StoreError> {
        let key = Self::key(name);
        serde_json::from_str::<serde::de::IgnoredAny>(json).map_err(|e| StoreError::corrupt(&key, e))?;
        self.store.set(&key, json).await
    }

    /// Every stored setting as name -> raw JSON.
    pub async fn all_raw(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let mut out = BTreeMap::new();
        for key in self.store.keys().await? {
            if let Some(name) = key.strip_prefix(SETTING_PREFIX) {
                if let Some(raw) = self.store.get(&key).await? {
                    out.insert(name.to_string(), raw);
                }
            }
        }
        Ok(out)
    }

    async fn get_or_default<T: DeserializeOwned>(&self, name: &str, default: T) -> Result<T, StoreError> {
        let key = Self::key(name);
        match self.store.get(&key).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(e) => {
                    tracing::warn!(%key, error = %e, "unreadable setting, using default");
                    Ok(default)
                }
            },
            None => Ok(default),
        }
    }

    pub async fn goal_seconds(&self) -> Result<u64, StoreError> {
        let goal = self.get_or_default(GOAL_SECONDS, DEFAULT_GOAL_SECS).await?;
        if goal == 0 {
            tracing::warn!("stored goal is zero, using default");
            return Ok(DEFAULT_GOAL_SECS);
        }
        Ok(goal)
    }

    pub async fn set_goal_seconds(&self, secs: u64) -> Result<(), StoreError> {
        self.set(GOAL_SECONDS, &secs).await
    }

    pub async fn default_view(&self) -> Result<DefaultView, StoreError> {
        self.get_or_default(DEFAULT_VIEW, DefaultView::default()).await
    }

    pub async fn set_default_view(&self, view: DefaultView) -> Result<(), StoreError> {
        self.set(DEFAULT_VIEW, &view).await
    }

    pub async fn selected_sound(&self) -> Result<String, StoreError> {
        self.get_or_default(SELECTED_SOUND, DEFAULT_SOUND.to_string()).await
    }

    pub async fn set_selected_sound(&self, sound: &str) -> Result<(), StoreError> {
        self.set(SELECTED_SOUND, sound).await
    }

    pub async fn theme(&self) -> Result<Theme, StoreError> {
        self.get_or_default(THEME, Theme::default()).await
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.set(THEME, &theme).await
    }
}
