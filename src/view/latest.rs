//! "Latest release" feature panel

use crate::dom::Element;
use crate::model::Release;

use super::links::append_streaming_links;

const DEFAULT_DESCRIPTION: &str = "A new release from emel0.";

pub struct LatestReleaseView {
    artwork: Element,
    title: Element,
    description: Element,
    links: Element,
}

impl LatestReleaseView {
    pub fn new(artwork: Element, title: Element, description: Element, links: Element) -> Self {
        Self {
            artwork,
            title,
            description,
            links,
        }
    }

    /// Fill the panel from `release`; `None` keeps whatever is already shown
    pub fn render(&self, release: Option<Release>) {
        let Some(release) = release else {
            tracing::debug!("No latest release, keeping panel as is");
            return;
        };

        self.artwork
            .set_attribute("src", release.artwork_url.as_deref().unwrap_or_default());
        self.title.set_text(&release.title);
        self.description
            .set_text(release.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION));

        self.links.clear_children();
        append_streaming_links(&self.links, &release.links, Some("streaming-link"));
    }
}
