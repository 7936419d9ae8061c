//! Page startup: fetch everything, hand each panel its data

use chrono::{Datelike, Local};

use crate::dom::{Document, Element};
use crate::model::RemoteReleaseGateway;
use crate::view::{CarouselView, LatestReleaseView, NotesPreviewView};

const ABOUT_TEASER: &str = "emel0 creates genre-fluid electronic and neoclassical pieces built around texture, space, and movement — always evolving, always shifting.";

pub struct PageController {
    gateway: RemoteReleaseGateway,
    carousel: CarouselView,
    latest: LatestReleaseView,
    notes: NotesPreviewView,
    about_teaser: Element,
    current_year: Element,
}

impl PageController {
    pub fn new(gateway: RemoteReleaseGateway, document: &Document) -> Self {
        Self {
            gateway,
            carousel: CarouselView::new(
                document.carousel_track.clone(),
                document.carousel_prev.clone(),
                document.carousel_next.clone(),
                document.window.clone(),
            ),
            latest: LatestReleaseView::new(
                document.latest_artwork.clone(),
                document.latest_title.clone(),
                document.latest_description.clone(),
                document.latest_links.clone(),
            ),
            notes: NotesPreviewView::new(document.notes_list.clone()),
            about_teaser: document.about_teaser.clone(),
            current_year: document.current_year.clone(),
        }
    }

    /// Populate every panel.
    ///
    /// The three fetches run concurrently and each one writes only to its own
    /// panel; the gateway never fails, so one empty panel cannot hold up another.
    pub async fn initialize(&mut self) {
        let Self {
            gateway,
            carousel,
            latest,
            notes,
            about_teaser,
            current_year,
        } = self;

        tokio::join!(
            async {
                let releases = gateway.fetch_releases().await;
                carousel.populate(releases);
            },
            async {
                latest.render(gateway.fetch_latest_release().await);
            },
            async {
                about_teaser.set_text(ABOUT_TEASER);
                notes.render(gateway.fetch_notes().await);
            },
        );

        current_year.set_text(&Local::now().year().to_string());
        tracing::info!(carousel_index = ?carousel.current_index(), "Page initialized");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;
    use crate::model::{Query, QueryClient, QueryError, Row};

    /// Serves fixed rows per collection; a missing collection fails
    struct FixtureClient {
        releases: Option<Vec<Value>>,
        notes: Option<Vec<Value>>,
    }

    #[async_trait]
    impl QueryClient for FixtureClient {
        async fn select(&self, query: &Query) -> Result<Vec<Row>, QueryError> {
            let rows = match query.collection.as_str() {
                "releases" => self.releases.as_ref(),
                "notes" => self.notes.as_ref(),
                _ => None,
            };
            let Some(rows) = rows else {
                return Err(QueryError::Status {
                    collection: query.collection.clone(),
                    status: 503,
                    message: "unavailable".to_string(),
                });
            };
            Ok(rows
                .iter()
                .filter_map(|v| v.as_object().cloned())
                .take(query.limit.unwrap_or(usize::MAX))
                .collect())
        }
    }

    fn controller(document: &Document, client: FixtureClient) -> PageController {
        let client: Arc<dyn QueryClient> = Arc::new(client);
        PageController::new(RemoteReleaseGateway::new(Some(client)), document)
    }

    #[tokio::test]
    async fn test_initialize_populates_every_panel() {
        let document = Document::new();
        let mut page = controller(
            &document,
            FixtureClient {
                releases: Some(vec![
                    json!({"id": 2, "title": "A", "spotify": "https://sp/a", "cover_url": "a.jpg"}),
                    json!({"id": 1, "title": "B"}),
                ]),
                notes: Some(vec![json!({"id": 1, "title": "Hello", "preview_text": "First note"})]),
            },
        );

        page.initialize().await;

        let items = document.carousel_track.find_all_by_class("carousel-item");
        assert_eq!(items.len(), 2);
        assert_eq!(page.carousel.current_index(), Some(0));
        document.carousel_next.dispatch("click");
        assert_eq!(page.carousel.current_index(), Some(1));
        document.carousel_next.dispatch("click");
        assert_eq!(page.carousel.current_index(), Some(0));

        assert_eq!(document.latest_title.text(), "A");
        assert_eq!(document.latest_artwork.attribute("src").as_deref(), Some("a.jpg"));
        assert_eq!(document.latest_links.children().len(), 1);

        assert_eq!(document.notes_list.find_all_by_class("note-card").len(), 1);
        assert!(document.about_teaser.text().starts_with("emel0 creates"));
        assert_eq!(document.current_year.text(), Local::now().year().to_string());
    }

    #[tokio::test]
    async fn test_failing_panel_does_not_block_others() {
        let document = Document::new();
        let mut page = controller(
            &document,
            FixtureClient {
                releases: None,
                notes: Some(vec![json!({"title": "Still here", "preview_text": "ok"})]),
            },
        );

        page.initialize().await;

        let track = document.carousel_track.children();
        assert_eq!(track.len(), 1);
        assert_eq!(track[0].text(), "No releases yet.");
        assert_eq!(document.carousel_next.listener_count("click"), 0);

        assert_eq!(document.latest_title.text(), "");
        assert_eq!(document.notes_list.find_all_by_class("note-card").len(), 1);
        assert!(!document.current_year.text().is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_client_shows_placeholders() {
        let document = Document::new();
        let mut page = PageController::new(RemoteReleaseGateway::new(None), &document);

        page.initialize().await;

        assert_eq!(document.carousel_track.children()[0].text(), "No releases yet.");
        assert_eq!(document.notes_list.children()[0].text(), "Nothing here yet.");
        assert!(document.latest_links.children().is_empty());
    }
}
