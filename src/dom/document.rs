//! Static page skeleton with the anchors the views write into

use super::Element;

/// The page markup, built once at startup.
///
/// Each anchor is a handle into the tree under `document_element`; components are
/// handed the anchors they own instead of looking them up.
#[derive(Clone)]
pub struct Document {
    /// Carries the `data-theme` attribute
    pub document_element: Element,
    /// Target for `resize` events
    pub window: Element,
    pub loading_screen: Element,
    pub theme_toggle: Element,
    pub theme_icon: Element,
    pub carousel_track: Element,
    pub carousel_prev: Element,
    pub carousel_next: Element,
    pub latest_artwork: Element,
    pub latest_title: Element,
    pub latest_description: Element,
    pub latest_links: Element,
    pub about_teaser: Element,
    pub notes_list: Element,
    pub current_year: Element,
}

impl Document {
    pub fn new() -> Self {
        let loading_screen = Element::new("div")
            .with_attr("id", "loading-screen")
            .with_child(&Element::new("span").with_class("loading-logo").with_text("emel0"));

        let theme_icon = Element::new("i").with_class("fas").with_class("fa-moon");
        let theme_toggle = Element::new("button")
            .with_attr("id", "theme-toggle")
            .with_child(&theme_icon);
        let header = Element::new("header")
            .with_child(&Element::new("h1").with_class("logo").with_text("emel0"))
            .with_child(&theme_toggle);

        let carousel_track = Element::new("div").with_class("carousel-track");
        let carousel_prev = Element::new("button").with_class("carousel-btn").with_class("prev");
        let carousel_next = Element::new("button").with_class("carousel-btn").with_class("next");
        let carousel = Element::new("section")
            .with_attr("id", "music")
            .with_child(&carousel_prev)
            .with_child(&Element::new("div").with_class("carousel").with_child(&carousel_track))
            .with_child(&carousel_next);

        let latest_artwork = Element::new("img").with_attr("id", "latest-artwork");
        let latest_title = Element::new("h3").with_attr("id", "latest-title");
        let latest_description = Element::new("p").with_attr("id", "latest-description");
        let latest_links = Element::new("div").with_attr("id", "latest-links");
        let latest = Element::new("section")
            .with_attr("id", "latest-release")
            .with_child(&latest_artwork)
            .with_child(&latest_title)
            .with_child(&latest_description)
            .with_child(&latest_links);

        let about_teaser = Element::new("p").with_attr("id", "about-teaser");
        let about = Element::new("section")
            .with_attr("id", "about")
            .with_child(&about_teaser);

        let notes_list = Element::new("div").with_class("notes-list");
        let notes = Element::new("section")
            .with_attr("id", "notes")
            .with_child(&notes_list);

        let current_year = Element::new("span").with_attr("id", "current-year");
        let footer = Element::new("footer").with_child(&current_year);

        let body = Element::new("body")
            .with_child(&loading_screen)
            .with_child(&header)
            .with_child(&carousel)
            .with_child(&latest)
            .with_child(&about)
            .with_child(&notes)
            .with_child(&footer);
        let document_element = Element::new("html").with_child(&body);

        Self {
            document_element,
            window: Element::new("window"),
            loading_screen,
            theme_toggle,
            theme_icon,
            carousel_track,
            carousel_prev,
            carousel_next,
            latest_artwork,
            latest_title,
            latest_description,
            latest_links,
            about_teaser,
            notes_list,
            current_year,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
