//! Theme preference and the services backing it
//!
//! Two layers decide the theme: an explicit choice persisted in the
//! key-value store, and the OS color-scheme signal used only while no explicit
//! choice exists.

use std::rc::Rc;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;

use super::storage::KeyValueStore;

const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Anything that is not a known theme name is treated as no preference
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// The OS "prefers dark" signal: queryable, and subscribable for changes
#[derive(Clone)]
pub struct ColorSchemeSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl ColorSchemeSignal {
    pub fn new(is_dark: bool) -> Self {
        let (tx, _rx) = watch::channel(is_dark);
        Self { tx: Arc::new(tx) }
    }

    /// Reads the terminal's `COLORFGBG` hint (`"fg;bg"`)
    pub fn detect() -> Self {
        let is_dark = std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| Self::background_is_dark(&value))
            .unwrap_or(true);
        tracing::debug!(is_dark, "Detected system color scheme");
        Self::new(is_dark)
    }

    /// ANSI backgrounds 0-6 and 8 are the dark ones
    fn background_is_dark(colorfgbg: &str) -> Option<bool> {
        let bg: u8 = colorfgbg.rsplit(';').next()?.trim().parse().ok()?;
        Some(matches!(bg, 0..=6 | 8))
    }

    pub fn is_dark(&self) -> bool {
        *self.tx.borrow()
    }

    /// Publish a new OS preference to every subscriber
    pub fn set(&self, is_dark: bool) {
        self.tx.send_replace(is_dark);
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

/// Single entry point for theme state: persisted choice plus OS signal
#[derive(Clone)]
pub struct ThemeStore {
    storage: Rc<dyn KeyValueStore>,
    environment: ColorSchemeSignal,
}

impl ThemeStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, environment: ColorSchemeSignal) -> Self {
        Self { storage, environment }
    }

    /// The user's explicit choice, if one was ever made
    pub fn explicit(&self) -> Option<ThemePreference> {
        self.storage
            .get(THEME_KEY)
            .and_then(|value| ThemePreference::parse(&value))
    }

    pub fn persist(&self, theme: ThemePreference) -> Result<()> {
        self.storage.set(THEME_KEY, theme.as_str())
    }

    pub fn os_prefers_dark(&self) -> bool {
        self.environment.is_dark()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.environment.subscribe()
    }
}
