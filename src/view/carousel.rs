//! Release carousel: item rendering and wrap-around navigation

use std::cell::Cell;
use std::rc::Rc;

use crate::dom::{Element, ListenerHandle};
use crate::model::Release;

use super::links::append_streaming_links;

const EMPTY_MESSAGE: &str = "No releases yet.";
const ITEM_CLASS: &str = "carousel-item";

/// Current position over a non-empty, fixed-length run of items
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    count: usize,
}

impl CarouselState {
    /// No state exists for an empty carousel
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self { index: 0, count })
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.count,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            index: (self.index + self.count - 1) % self.count,
            ..self
        }
    }
}

/// Listener registrations for one populated carousel; dropping detaches all of them
struct NavigationBindings {
    _next: ListenerHandle,
    _previous: ListenerHandle,
    _resize: ListenerHandle,
}

pub struct CarouselView {
    track: Element,
    prev_button: Element,
    next_button: Element,
    window: Element,
    state: Rc<Cell<Option<CarouselState>>>,
    bindings: Option<NavigationBindings>,
}

impl CarouselView {
    pub fn new(track: Element, prev_button: Element, next_button: Element, window: Element) -> Self {
        Self {
            track,
            prev_button,
            next_button,
            window,
            state: Rc::new(Cell::new(None)),
            bindings: None,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.get().map(CarouselState::index)
    }

    pub fn populate(&mut self, releases: Vec<Release>) {
        // Old handlers go before anything else is touched
        self.bindings = None;
        self.state.set(None);
        self.track.clear_children();
        self.track.set_style("transform", "translateX(0px)");

        if releases.is_empty() {
            tracing::debug!("No releases to show in carousel");
            self.track
                .append_child(&Element::new("p").with_class("empty-message").with_text(EMPTY_MESSAGE));
            return;
        }

        for release in &releases {
            self.track.append_child(&Self::render_item(release));
        }
        tracing::debug!(items = releases.len(), "Carousel populated");

        self.setup_navigation(releases.len());
    }

    fn render_item(release: &Release) -> Element {
        let artwork = Element::new("div").with_class("release-artwork").with_child(
            &Element::new("img")
                .with_attr("src", release.artwork_url.as_deref().unwrap_or_default())
                .with_attr("alt", &release.title),
        );

        let links = Element::new("div").with_class("streaming-links");
        append_streaming_links(&links, &release.links, None);

        let info = Element::new("div")
            .with_class("release-info")
            .with_child(&Element::new("h3").with_text(&release.title))
            .with_child(&Element::new("p").with_text(release.description.as_deref().unwrap_or_default()))
            .with_child(&links);

        Element::new("div")
            .with_class(ITEM_CLASS)
            .with_child(&artwork)
            .with_child(&info)
    }

    fn setup_navigation(&mut self, count: usize) {
        let Some(initial) = CarouselState::new(count) else {
            return;
        };
        self.state.set(Some(initial));
        update_offset(&self.track, initial);

        let step = |advance: fn(CarouselState) -> CarouselState| {
            let state = Rc::clone(&self.state);
            let track = self.track.clone();
            move || {
                if let Some(current) = state.get() {
                    let moved = advance(current);
                    state.set(Some(moved));
                    update_offset(&track, moved);
                }
            }
        };

        let next = self.next_button.add_event_listener("click", step(CarouselState::next));
        let previous = self.prev_button.add_event_listener("click", step(CarouselState::previous));

        let state = Rc::clone(&self.state);
        let track = self.track.clone();
        let resize = self.window.add_event_listener("resize", move || {
            if let Some(current) = state.get() {
                update_offset(&track, current);
            }
        });

        self.bindings = Some(NavigationBindings {
            _next: next,
            _previous: previous,
            _resize: resize,
        });
        tracing::trace!(
            next_listeners = self.next_button.listener_count("click"),
            prev_listeners = self.prev_button.listener_count("click"),
            "Carousel navigation bound"
        );
    }
}

/// Translate the track so item `index` is in view; all items share the first one's width
fn update_offset(track: &Element, state: CarouselState) {
    let width = track
        .find_all_by_class(ITEM_CLASS)
        .first()
        .map(Element::measured_width)
        .unwrap_or_default();
    let offset = state.index() as f64 * width;
    track.set_style("transform", &format!("translateX(-{offset}px)"));
}
