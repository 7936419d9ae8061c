//! Render target - a small in-memory document tree
//!
//! Views never reach for a global document. They receive `Element` handles at
//! construction and write into them; the terminal renderer reads the same tree
//! back when painting. Everything here is single-threaded (`Rc`/`RefCell`),
//! matching the cooperative event loop the page runs on.
//!
//! - `events`: listener registration and dispatch
//! - `document`: the static page skeleton and its named anchors

mod document;
mod events;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub use document::Document;
pub use events::ListenerHandle;

use events::Listener;

/// Backing data of one element
#[derive(Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    children: Vec<Element>,
    measured_width: f64,
    listeners: Vec<Listener>,
}

/// Shared handle to a node in the document tree
#[derive(Clone)]
pub struct Element(Rc<RefCell<Node>>);

impl Element {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_string(),
            ..Node::default()
        })))
    }

    /// Builder-style helper for static markup
    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(self, child: &Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    /// Replace the whole class list (`className = "..."`)
    pub fn set_class_name(&self, class_name: &str) {
        self.0.borrow_mut().classes = class_name.split_whitespace().map(str::to_string).collect();
    }

    #[cfg(test)]
    pub fn class_name(&self) -> String {
        self.0.borrow().classes.join(" ")
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .style
            .insert(property.to_string(), value.to_string());
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().style.get(property).cloned()
    }

    pub fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn append_child(&self, child: &Element) {
        self.0.borrow_mut().children.push(child.clone());
    }

    /// Drop every child (`innerHTML = ""`)
    pub fn clear_children(&self) {
        self.0.borrow_mut().children.clear();
    }

    pub fn children(&self) -> Vec<Element> {
        self.0.borrow().children.clone()
    }

    /// Descendants carrying `class`, in document order
    pub fn find_all_by_class(&self, class: &str) -> Vec<Element> {
        let mut found = Vec::new();
        for child in self.children() {
            if child.has_class(class) {
                found.push(child.clone());
            }
            found.extend(child.find_all_by_class(class));
        }
        found
    }

    /// First descendant with the given tag, in document order
    pub fn find_by_tag(&self, tag: &str) -> Option<Element> {
        for child in self.children() {
            if child.tag() == tag {
                return Some(child);
            }
            if let Some(found) = child.find_by_tag(tag) {
                return Some(found);
            }
        }
        None
    }

    /// Width assigned by the last layout pass
    pub fn measured_width(&self) -> f64 {
        self.0.borrow().measured_width
    }

    pub fn set_measured_width(&self, width: f64) {
        self.0.borrow_mut().measured_width = width;
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("Element")
            .field("tag", &node.tag)
            .field("classes", &node.classes)
            .field("text", &node.text)
            .field("children", &node.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_class_list_has_no_duplicates() {
        let el = Element::new("div").with_class("card").with_class("card");
        assert_eq!(el.class_name(), "card");

        el.set_class_name("fas  fa-sun");
        assert!(el.has_class("fa-sun"));
        assert!(!el.has_class("card"));
    }

    #[test]
    fn test_find_all_by_class_is_document_order() {
        let inner = Element::new("p").with_class("hit").with_text("second");
        let root = Element::new("div")
            .with_child(&Element::new("div").with_class("hit").with_text("first").with_child(&inner))
            .with_child(&Element::new("p").with_class("hit").with_text("third"));

        let texts: Vec<String> = root.find_all_by_class("hit").iter().map(Element::text).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_clear_children() {
        let root = Element::new("ul").with_child(&Element::new("li")).with_child(&Element::new("li"));
        assert_eq!(root.children().len(), 2);
        root.clear_children();
        assert!(root.children().is_empty());
        assert!(root.find_by_tag("li").is_none());
    }
}
