//! Page layout for the terminal and the measurement pass feeding the document

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::dom::Document;

/// Width reserved on each side of the carousel for the prev/next arrows
pub const CAROUSEL_GUTTER: u16 = 3;

pub struct PageAreas {
    pub header: Rect,
    pub carousel: Rect,
    pub about: Rect,
    pub latest: Rect,
    pub notes: Rect,
    pub footer: Rect,
}

pub fn split(area: Rect) -> PageAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Site name + theme toggle
            Constraint::Min(0),    // Panels
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    PageAreas {
        header: rows[0],
        carousel: left[0],
        about: left[1],
        latest: right[0],
        notes: right[1],
        footer: rows[2],
    }
}

/// Inner area one carousel item occupies
pub fn carousel_viewport(carousel: Rect) -> Rect {
    let inner = Rect {
        x: carousel.x.saturating_add(1),
        y: carousel.y.saturating_add(1),
        width: carousel.width.saturating_sub(2),
        height: carousel.height.saturating_sub(2),
    };
    Rect {
        x: inner.x.saturating_add(CAROUSEL_GUTTER),
        width: inner.width.saturating_sub(2 * CAROUSEL_GUTTER),
        ..inner
    }
}

/// Write the current item width into every carousel item, like a browser layout pass
pub fn measure(document: &Document, area: Rect) {
    let width = f64::from(carousel_viewport(split(area).carousel).width);
    for item in document.carousel_track.find_all_by_class("carousel-item") {
        item.set_measured_width(width);
    }
}
