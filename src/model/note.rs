//! Journal notes shown in the preview panel

use super::row::{self, Row};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub preview_text: String,
    pub created_at: Option<String>,
}

impl Note {
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row::identifier(row),
            title: row::first_present(row, &["title"]).unwrap_or_default(),
            preview_text: row::first_present(row, &["preview_text"]).unwrap_or_default(),
            created_at: row::first_present(row, &["created_at"]),
        }
    }
}
