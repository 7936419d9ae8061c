//! Helpers shared by the terminal renderer

use ratatui::style::{Color, Modifier, Style};

use crate::dom::Element;

/// Colors for one theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub muted: Color,
}

impl Palette {
    /// Dark unless the document explicitly says `light`
    pub fn for_theme(data_theme: Option<&str>) -> Self {
        if data_theme == Some("light") {
            Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Magenta,
                muted: Color::DarkGray,
            }
        } else {
            Self {
                fg: Color::White,
                bg: Color::Black,
                accent: Color::Cyan,
                muted: Color::Gray,
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn title(&self) -> Style {
        self.base().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        self.base().fg(self.muted)
    }
}

/// Terminal stand-in for the theme icon font
pub fn theme_glyph(icon: &Element) -> &'static str {
    if icon.has_class("fa-sun") { "☀" } else { "☾" }
}

/// Horizontal offset in px from a `translateX(-Npx)` transform
pub fn translate_x_offset(transform: Option<&str>) -> f64 {
    transform
        .and_then(|t| t.strip_prefix("translateX("))
        .and_then(|t| t.strip_suffix("px)"))
        .and_then(|t| t.parse::<f64>().ok())
        .map(f64::abs)
        .unwrap_or_default()
}

/// Labels of the streaming anchors inside `container`
pub fn link_labels(container: &Element) -> Vec<String> {
    container
        .children()
        .iter()
        .filter_map(|anchor| anchor.attribute("aria-label"))
        .collect()
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}
