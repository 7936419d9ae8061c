//! Controller module - page orchestration and terminal event handling
//!
//! - `page`: startup fetches feeding the page components
//! - `theme`: theme resolution, toggle and OS-change handling
//! - `loading`: loading screen timing
//! - `input`: key event handling

mod page;
mod theme;
mod loading;
mod input;

use std::time::Instant;

use ratatui::layout::Rect;

use crate::dom::Document;
use crate::model::ColorSchemeSignal;
use crate::view;

pub use page::PageController;
pub use theme::ThemeController;
pub use loading::LoadingScreen;

/// Owns the interactive side of the page once it is on screen
pub struct AppController {
    document: Document,
    theme: ThemeController,
    loading: LoadingScreen,
    environment: ColorSchemeSignal,
    should_quit: bool,
}

impl AppController {
    pub fn new(
        document: Document,
        theme: ThemeController,
        loading: LoadingScreen,
        environment: ColorSchemeSignal,
    ) -> Self {
        Self {
            document,
            theme,
            loading,
            environment,
            should_quit: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// First frame is on screen
    pub fn on_page_loaded(&mut self, now: Instant) {
        self.loading.mark_loaded(now);
    }

    /// Re-measure for the new terminal size, then let listeners react
    pub fn handle_resize(&self, width: u16, height: u16) {
        view::measure(&self.document, Rect::new(0, 0, width, height));
        self.document.window.dispatch("resize");
    }

    pub fn handle_environment_change(&self, is_dark: bool) {
        tracing::debug!(is_dark, "System color scheme changed");
        self.theme.on_environment_change(is_dark);
    }

    /// Advance timers: loading screen and toggle press animation
    pub fn tick(&mut self, now: Instant) {
        self.loading.tick(now);
        self.theme.tick(now);
    }
}
