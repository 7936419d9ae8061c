//! Event listener registration
//!
//! A registration lives exactly as long as its `ListenerHandle`. Components
//! that rebind keep the handles and drop them before binding again, so stale
//! handlers can never pile up on a shared target like the window.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Element, Node};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

pub(super) struct Listener {
    id: u64,
    event: String,
    handler: Rc<dyn Fn()>,
}

/// Scoped listener registration; detaches on drop
#[must_use = "dropping the handle detaches the listener immediately"]
pub struct ListenerHandle {
    target: Weak<RefCell<Node>>,
    id: u64,
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Some(node) = self.target.upgrade() {
            node.borrow_mut().listeners.retain(|l| l.id != self.id);
        }
    }
}

impl Element {
    pub fn add_event_listener(&self, event: &str, handler: impl Fn() + 'static) -> ListenerHandle {
        let id = NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed);
        self.0.borrow_mut().listeners.push(Listener {
            id,
            event: event.to_string(),
            handler: Rc::new(handler),
        });
        ListenerHandle {
            target: Rc::downgrade(&self.0),
            id,
        }
    }

    /// Run every handler registered for `event`, in registration order.
    ///
    /// Handlers are collected before any of them runs, so a handler may freely
    /// add or drop registrations on this element.
    pub fn dispatch(&self, event: &str) {
        let handlers: Vec<Rc<dyn Fn()>> = self
            .0
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.event == event)
            .map(|l| Rc::clone(&l.handler))
            .collect();

        for handler in handlers {
            handler();
        }
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.event == event)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_dispatch_runs_matching_handlers() {
        let button = Element::new("button");
        let clicks = Rc::new(Cell::new(0));

        let counter = Rc::clone(&clicks);
        let _click = button.add_event_listener("click", move || counter.set(counter.get() + 1));
        let _other = button.add_event_listener("focus", || panic!("wrong event"));

        button.dispatch("click");
        button.dispatch("click");
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn test_dropping_handle_detaches() {
        let window = Element::new("window");
        let fired = Rc::new(Cell::new(false));

        let flag = Rc::clone(&fired);
        let handle = window.add_event_listener("resize", move || flag.set(true));
        assert_eq!(window.listener_count("resize"), 1);

        drop(handle);
        assert_eq!(window.listener_count("resize"), 0);
        window.dispatch("resize");
        assert!(!fired.get());
    }

    #[test]
    fn test_handle_outliving_target_is_harmless() {
        let handle = {
            let button = Element::new("button");
            button.add_event_listener("click", || {})
        };
        drop(handle);
    }

    #[test]
    fn test_dispatch_without_listeners_is_noop() {
        Element::new("button").dispatch("click");
    }
}
