//! Page-wide light/dark preference.
//!
//! DESIGN
//! ======
//! `ThemePreference` is the single authority for the theme. It never reads
//! ambient browser state itself; every read and write goes through a
//! `ThemeEnvironment`, so the resolution order (persisted value, then system
//! signal, then light) lives in one place and is testable off-browser.
//!
//! The app creates one preference at startup and provides it as a
//! `RwSignal<ThemePreference>` context.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Visual theme applied to the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme value {0:?}")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("persistent storage unavailable")]
    Unavailable,
    #[error("storage rejected write for key {key:?}")]
    WriteRejected { key: String },
}

/// Everything the theme needs from its host environment.
pub trait ThemeEnvironment {
    /// Persisted value for `key`, if any.
    fn read_persisted(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when storage is missing or refuses the write.
    fn write_persisted(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// System "prefers dark" signal; `None` when the host cannot tell.
    fn system_prefers_dark(&self) -> Option<bool>;

    /// Reflect `mode` on the document-level presentation flag.
    fn apply_presentation(&self, mode: ThemeMode);
}

/// Resolve the startup theme: persisted value, then system signal, then light.
pub fn resolve_initial_mode(env: &impl ThemeEnvironment) -> ThemeMode {
    if let Some(raw) = env.read_persisted(THEME_STORAGE_KEY) {
        match raw.parse::<ThemeMode>() {
            Ok(mode) => return mode,
            Err(e) => leptos::logging::warn!("ignoring persisted theme: {e}"),
        }
    }
    env.system_prefers_dark().map_or(ThemeMode::Light, ThemeMode::from_dark)
}

/// The current theme plus its initialization and toggle entry points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemePreference {
    mode: ThemeMode,
}

impl ThemePreference {
    /// Resolve the startup mode and apply it to the document.
    pub fn initialize(env: &impl ThemeEnvironment) -> Self {
        let mode = resolve_initial_mode(env);
        env.apply_presentation(mode);
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Flip the mode, persist it, and apply it to the document.
    ///
    /// A failed write keeps the in-memory value and is only logged.
    pub fn toggle(&mut self, env: &impl ThemeEnvironment) -> ThemeMode {
        self.mode = self.mode.toggled();
        if let Err(e) = env.write_persisted(THEME_STORAGE_KEY, self.mode.as_str()) {
            leptos::logging::warn!("theme preference not persisted: {e}");
        }
        env.apply_presentation(self.mode);
        self.mode
    }
}
