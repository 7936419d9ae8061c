//! Terminal painting of the page sections, read back from the document

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::dom::{Document, Element};

use super::layout::{carousel_viewport, CAROUSEL_GUTTER};
use super::utils::{link_labels, theme_glyph, translate_x_offset, truncate_string, Palette};

fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(palette.title())
        .border_style(palette.dim())
        .style(palette.base())
        .padding(Padding::horizontal(1))
}

fn text_of(element: Option<Element>) -> String {
    element.map(|e| e.text()).unwrap_or_default()
}

/// Placeholder text a view left in `container`, if any
fn empty_message(container: &Element) -> Option<String> {
    container
        .children()
        .iter()
        .find(|child| child.has_class("empty-message"))
        .map(Element::text)
}

pub fn render_header(frame: &mut Frame, area: Rect, document: &Document, palette: &Palette) {
    let theme = document
        .document_element
        .attribute("data-theme")
        .unwrap_or_else(|| "dark".to_string());
    let toggle_scale = document
        .theme_toggle
        .style("transform")
        .unwrap_or_else(|| "scale(1)".to_string());
    let pressed = toggle_scale != "scale(1)";

    let toggle = format!(
        "{}{} {}{}",
        if pressed { "(" } else { "[" },
        theme_glyph(&document.theme_icon),
        theme,
        if pressed { ")" } else { "]" },
    );

    let line = Line::from(vec![
        Span::styled("emel0", palette.title()),
        Span::styled("  music · notes · about", palette.dim()),
    ]);
    let header = Paragraph::new(line).block(panel("", palette));
    frame.render_widget(header, area);

    let toggle_width = toggle.chars().count() as u16 + 2;
    let toggle_area = Rect {
        x: area.x + area.width.saturating_sub(toggle_width + 1),
        y: area.y + 1,
        width: toggle_width.min(area.width),
        height: 1.min(area.height),
    }
    .intersection(frame.area());
    frame.render_widget(Paragraph::new(toggle).style(palette.title()), toggle_area);
}

pub fn render_carousel(frame: &mut Frame, area: Rect, document: &Document, palette: &Palette) {
    let block = panel(" Music ", palette);
    frame.render_widget(block, area);

    let track = &document.carousel_track;
    let items = track.find_all_by_class("carousel-item");
    let viewport = carousel_viewport(area);

    if items.is_empty() {
        let message = empty_message(track).unwrap_or_default();
        frame.render_widget(
            Paragraph::new(message).style(palette.dim()).alignment(Alignment::Center),
            viewport,
        );
        return;
    }

    let width = items[0].measured_width();
    let offset = translate_x_offset(track.style("transform").as_deref());
    let index = if width > 0.0 {
        ((offset / width).round() as usize).min(items.len() - 1)
    } else {
        0
    };
    let item = &items[index];

    let title = text_of(item.find_by_tag("h3"));
    let description = text_of(item.find_by_tag("p"));
    let artwork = item
        .find_by_tag("img")
        .and_then(|img| img.attribute("src"))
        .unwrap_or_default();
    let links = item
        .find_all_by_class("streaming-links")
        .first()
        .map(link_labels)
        .unwrap_or_default();

    let max = viewport.width as usize;
    let mut lines = vec![
        Line::styled(truncate_string(&title, max), palette.title()),
        Line::default(),
    ];
    if !description.is_empty() {
        lines.push(Line::styled(description, palette.base()));
        lines.push(Line::default());
    }
    if !artwork.is_empty() {
        lines.push(Line::styled(truncate_string(&format!("artwork: {artwork}"), max), palette.dim()));
    }
    if !links.is_empty() {
        lines.push(Line::styled(format!("listen: {}", links.join(" · ")), palette.base()));
    }

    let dots: String = (0..items.len())
        .map(|i| if i == index { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(Line::default());
    lines.push(Line::styled(dots, palette.dim()).alignment(Alignment::Center));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).style(palette.base()),
        viewport,
    );

    // prev / next arrows in the gutters
    let arrow_y = viewport.y + viewport.height / 2;
    let prev_area = Rect::new(viewport.x.saturating_sub(CAROUSEL_GUTTER), arrow_y, CAROUSEL_GUTTER, 1)
        .intersection(frame.area());
    let next_area = Rect::new(viewport.x + viewport.width, arrow_y, CAROUSEL_GUTTER, 1)
        .intersection(frame.area());
    if viewport.height > 0 && viewport.width > 0 {
        frame.render_widget(Paragraph::new(" ◀").style(palette.title()), prev_area);
        frame.render_widget(Paragraph::new("▶ ").style(palette.title()), next_area);
    }
}

pub fn render_latest(frame: &mut Frame, area: Rect, document: &Document, palette: &Palette) {
    let title = document.latest_title.text();
    let mut lines = Vec::new();

    if !title.is_empty() {
        lines.push(Line::styled(title, palette.title()));
        lines.push(Line::styled(document.latest_description.text(), palette.base()));
        if let Some(src) = document.latest_artwork.attribute("src").filter(|s| !s.is_empty()) {
            lines.push(Line::styled(format!("artwork: {src}"), palette.dim()));
        }
        let links = link_labels(&document.latest_links);
        if !links.is_empty() {
            lines.push(Line::default());
            lines.extend(links.into_iter().map(|label| Line::styled(format!("▸ {label}"), palette.base())));
        }
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(" Latest Release ", palette));
    frame.render_widget(widget, area);
}

pub fn render_about(frame: &mut Frame, area: Rect, document: &Document, palette: &Palette) {
    let widget = Paragraph::new(document.about_teaser.text())
        .style(palette.base())
        .wrap(Wrap { trim: true })
        .block(panel(" About ", palette));
    frame.render_widget(widget, area);
}

pub fn render_notes(frame: &mut Frame, area: Rect, document: &Document, palette: &Palette) {
    let list = &document.notes_list;
    let mut lines = Vec::new();

    if let Some(message) = empty_message(list) {
        lines.push(Line::styled(message, palette.dim()));
    }
    for card in list.find_all_by_class("note-card") {
        lines.push(Line::styled(text_of(card.find_by_tag("h4")), palette.title()));
        lines.push(Line::styled(text_of(card.find_by_tag("p")), palette.base()));
        lines.push(Line::default());
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(" Notes ", palette));
    frame.render_widget(widget, area);
}

pub fn render_footer(frame: &mut Frame, area: Rect, document: &Document, palette: &Palette) {
    let year = document.current_year.text();
    let line = Line::from(vec![
        Span::styled(format!("© {year} emel0"), palette.base()),
        Span::styled("   ←/→ browse · t theme · o system appearance · q quit", palette.dim()),
    ]);
    frame.render_widget(Paragraph::new(line).block(panel("", palette)), area);
}
