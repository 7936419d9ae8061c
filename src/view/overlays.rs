//! Loading screen overlay

use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::dom::Document;

use super::utils::Palette;

/// The splash is painted until the loading controller sets `display: none`
pub fn loading_screen_visible(document: &Document) -> bool {
    document.loading_screen.style("display").as_deref() != Some("none")
}

pub fn render_loading_screen(frame: &mut Frame, document: &Document, palette: &Palette) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(palette.base()), area);

    // Fading out: same splash, dimmed
    let style = if document.loading_screen.has_class("hidden") {
        palette.dim()
    } else {
        palette.title().add_modifier(Modifier::SLOW_BLINK)
    };

    let logo = document
        .loading_screen
        .find_all_by_class("loading-logo")
        .first()
        .map(|el| el.text())
        .unwrap_or_default();

    let y = area.y + area.height / 2;
    let line_area = Rect {
        x: area.x,
        y,
        width: area.width,
        height: 1.min(area.height),
    };
    frame.render_widget(
        Paragraph::new(Line::styled(logo, style)).alignment(Alignment::Center),
        line_area,
    );
}
