//! Light/dark theme resolution, toggling and OS-change handling

use std::time::{Duration, Instant};

use crate::dom::Element;
use crate::model::{ThemePreference, ThemeStore};

const THEME_ATTRIBUTE: &str = "data-theme";
const PRESS_ANIMATION: Duration = Duration::from_millis(150);

pub struct ThemeController {
    store: ThemeStore,
    document_element: Element,
    toggle_button: Element,
    icon: Element,
    press_ends_at: Option<Instant>,
}

impl ThemeController {
    pub fn new(store: ThemeStore, document_element: Element, toggle_button: Element, icon: Element) -> Self {
        Self {
            store,
            document_element,
            toggle_button,
            icon,
            press_ends_at: None,
        }
    }

    /// Apply the stored choice, or force `light` when the OS is not dark.
    ///
    /// Dark is the page default, so a dark OS leaves the attribute unset.
    pub fn initialize(&self) {
        match self.store.explicit() {
            Some(theme) => self.apply(theme),
            None if !self.store.os_prefers_dark() => self.apply(ThemePreference::Light),
            None => {}
        }
        self.refresh_icon();
        tracing::debug!(theme = ?self.effective_theme(), "Theme initialized");
    }

    /// What the page currently shows
    pub fn effective_theme(&self) -> ThemePreference {
        match self.document_element.attribute(THEME_ATTRIBUTE).as_deref() {
            Some("light") => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }

    /// Flip the theme and remember it as the user's explicit choice
    pub fn toggle(&mut self, now: Instant) -> ThemePreference {
        let theme = self.effective_theme().toggled();
        self.apply(theme);
        if let Err(e) = self.store.persist(theme) {
            tracing::warn!(error = %e, "Could not persist theme preference");
        }
        self.refresh_icon();

        self.toggle_button.set_style("transform", "scale(0.9)");
        self.press_ends_at = Some(now + PRESS_ANIMATION);

        tracing::info!(theme = theme.as_str(), "Theme toggled");
        theme
    }

    /// Follow the OS only while the user has not chosen explicitly
    pub fn on_environment_change(&self, is_dark: bool) {
        if self.store.explicit().is_some() {
            tracing::debug!(is_dark, "Ignoring OS theme change, explicit preference set");
            return;
        }
        self.apply(ThemePreference::from_is_dark(is_dark));
        self.refresh_icon();
    }

    /// Ends the toggle press animation once it is due
    pub fn tick(&mut self, now: Instant) {
        if self.press_ends_at.is_some_and(|end| now >= end) {
            self.toggle_button.set_style("transform", "scale(1)");
            self.press_ends_at = None;
        }
    }

    fn apply(&self, theme: ThemePreference) {
        self.document_element.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }

    fn refresh_icon(&self) {
        let class_name = match self.effective_theme() {
            ThemePreference::Light => "fas fa-sun",
            ThemePreference::Dark => "fas fa-moon",
        };
        self.icon.set_class_name(class_name);
    }
}
