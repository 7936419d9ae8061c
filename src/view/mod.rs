//! View module - page components and terminal rendering
//!
//! Page components write into the document:
//!
//! - `carousel`: release carousel with wrap-around navigation
//! - `latest`: the latest-release feature panel
//! - `notes`: notes preview list
//! - `links`: streaming link anchors shared by the above
//!
//! The terminal side paints that document with ratatui:
//!
//! - `layout`: page structure and the measurement pass
//! - `sections`: one painter per page section
//! - `overlays`: loading screen
//! - `utils`: palette and small formatting helpers

mod carousel;
mod latest;
mod notes;
mod links;
mod layout;
mod sections;
mod overlays;
mod utils;

use ratatui::{widgets::Block, Frame};

use crate::dom::Document;

pub use carousel::CarouselView;
pub use latest::LatestReleaseView;
pub use notes::NotesPreviewView;
pub use layout::measure;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, document: &Document) {
        let area = frame.area();
        let palette = utils::Palette::for_theme(document.document_element.attribute("data-theme").as_deref());

        // Keep item widths in step with the area about to be painted
        layout::measure(document, area);

        frame.render_widget(Block::default().style(palette.base()), area);

        let areas = layout::split(area);
        sections::render_header(frame, areas.header, document, &palette);
        sections::render_carousel(frame, areas.carousel, document, &palette);
        sections::render_about(frame, areas.about, document, &palette);
        sections::render_latest(frame, areas.latest, document, &palette);
        sections::render_notes(frame, areas.notes, document, &palette);
        sections::render_footer(frame, areas.footer, document, &palette);

        if overlays::loading_screen_visible(document) {
            overlays::render_loading_screen(frame, document, &palette);
        }
    }
}
