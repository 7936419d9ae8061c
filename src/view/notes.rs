//! Notes preview list

use crate::dom::Element;
use crate::model::Note;

const EMPTY_MESSAGE: &str = "Nothing here yet.";

pub struct NotesPreviewView {
    list: Element,
}

impl NotesPreviewView {
    pub fn new(list: Element) -> Self {
        Self { list }
    }

    /// Render notes in the order given
    pub fn render(&self, notes: Vec<Note>) {
        self.list.clear_children();

        if notes.is_empty() {
            self.list
                .append_child(&Element::new("p").with_class("empty-message").with_text(EMPTY_MESSAGE));
            return;
        }

        for note in &notes {
            let card = Element::new("div")
                .with_class("note-card")
                .with_child(&Element::new("h4").with_text(&note.title))
                .with_child(&Element::new("p").with_text(&note.preview_text));
            self.list.append_child(&card);
        }
    }
}
