//! Loading screen timing
//!
//! The splash hides one second after the page has loaded, or after three
//! seconds in any case, then is removed once its fade-out has run. Fetches
//! play no part in this.

use std::time::{Duration, Instant};

use crate::dom::Element;

const MIN_DISPLAY: Duration = Duration::from_secs(1);
const FALLBACK_HIDE: Duration = Duration::from_secs(3);
const FADE_OUT: Duration = Duration::from_millis(500);

pub struct LoadingScreen {
    element: Element,
    started_at: Instant,
    loaded_at: Option<Instant>,
    hidden_at: Option<Instant>,
    removed: bool,
}

impl LoadingScreen {
    pub fn new(element: Element, now: Instant) -> Self {
        Self {
            element,
            started_at: now,
            loaded_at: None,
            hidden_at: None,
            removed: false,
        }
    }

    /// The page has been painted once; only the first call counts
    pub fn mark_loaded(&mut self, now: Instant) {
        self.loaded_at.get_or_insert(now);
    }

    pub fn tick(&mut self, now: Instant) {
        if self.hidden_at.is_none() {
            let load_due = self.loaded_at.is_some_and(|at| now >= at + MIN_DISPLAY);
            let fallback_due = now >= self.started_at + FALLBACK_HIDE;
            if load_due || fallback_due {
                self.element.add_class("hidden");
                self.hidden_at = Some(now);
                tracing::debug!(fallback = !load_due, "Loading screen hidden");
            }
        }

        if let Some(hidden_at) = self.hidden_at {
            if !self.removed && now >= hidden_at + FADE_OUT {
                self.element.set_style("display", "none");
                self.removed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_hides_one_second_after_load() {
        let element = Element::new("div");
        let start = Instant::now();
        let mut screen = LoadingScreen::new(element.clone(), start);

        screen.mark_loaded(start + ms(200));
        screen.tick(start + ms(1100));
        assert!(!element.has_class("hidden"));

        screen.tick(start + ms(1200));
        assert!(element.has_class("hidden"));
        assert_eq!(element.style("display"), None);

        screen.tick(start + ms(1700));
        assert_eq!(element.style("display").as_deref(), Some("none"));
    }

    #[test]
    fn test_fallback_without_load() {
        let element = Element::new("div");
        let start = Instant::now();
        let mut screen = LoadingScreen::new(element.clone(), start);

        screen.tick(start + ms(2999));
        assert!(!element.has_class("hidden"));
        screen.tick(start + ms(3000));
        assert!(element.has_class("hidden"));
        screen.tick(start + ms(3500));
        assert_eq!(element.style("display").as_deref(), Some("none"));
    }

    #[test]
    fn test_later_load_marks_are_ignored() {
        let element = Element::new("div");
        let start = Instant::now();
        let mut screen = LoadingScreen::new(element.clone(), start);

        screen.mark_loaded(start);
        screen.mark_loaded(start + ms(900));
        screen.tick(start + ms(1000));
        assert!(element.has_class("hidden"));
    }
}
