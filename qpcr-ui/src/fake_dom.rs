//! In-memory DOM for exercising controllers without a browser
//!
//! Elements live in a flat list in document order. Clicks run the attached
//! handlers synchronously, the way the browser dispatches them.

use crate::dom::{Dom, DomElement};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

type Handler = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct Node {
    tag: String,
    id: RefCell<Option<String>>,
    classes: RefCell<Vec<String>>,
    attributes: RefCell<BTreeMap<String, String>>,
    value: RefCell<String>,
    text: RefCell<String>,
    handlers: RefCell<Vec<(u64, Handler)>>,
}

/// Handle to a fake element
#[derive(Clone)]
pub struct FakeElement(Rc<Node>);

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(Node {
            tag: tag.to_string(),
            ..Node::default()
        }))
    }

    pub fn with_id(self, id: &str) -> Self {
        *self.0.id.borrow_mut() = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn id(&self) -> Option<String> {
        self.0.id.borrow().clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.classes.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.0.handlers.borrow().len()
    }

    /// Run every click handler attached to this element.
    pub fn click(&self) {
        // Snapshot so handlers may touch this element without a live borrow.
        let handlers: Vec<Handler> = self
            .0
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            (handler.borrow_mut())();
        }
    }

    pub fn same_node(&self, other: &FakeElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl DomElement for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    fn value(&self) -> String {
        self.0.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.0.value.borrow_mut() = value.to_string();
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.classes.borrow_mut().push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().retain(|c| c != class);
    }

    fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.0.text.borrow_mut() = text.to_string();
    }
}

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeElement")
            .field("tag", &self.0.tag)
            .field("id", &self.0.id.borrow())
            .field("classes", &self.0.classes.borrow())
            .finish()
    }
}

/// Detaches its handler from the element when dropped
pub struct FakeListener {
    element: FakeElement,
    id: u64,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        self.element
            .0
            .handlers
            .borrow_mut()
            .retain(|(id, _)| *id != self.id);
    }
}

#[derive(Default)]
pub struct FakeDom {
    elements: Vec<FakeElement>,
    next_listener_id: Cell<u64>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return a handle to it.
    pub fn add(&mut self, element: FakeElement) -> FakeElement {
        self.elements.push(element.clone());
        element
    }

    pub fn get(&self, id: &str) -> FakeElement {
        self.element_by_id(id)
            .unwrap_or_else(|| panic!("no element with id {id:?}"))
    }

    /// The element of `class` whose `data-value` is `value`.
    pub fn button(&self, class: &str, value: &str) -> FakeElement {
        self.elements_by_class(class)
            .into_iter()
            .find(|el| el.attribute("data-value").as_deref() == Some(value))
            .unwrap_or_else(|| panic!("no .{class} button with value {value:?}"))
    }

    /// Total click handlers attached across the document.
    pub fn listener_count(&self) -> usize {
        self.elements.iter().map(FakeElement::listener_count).sum()
    }

    /// Elements of `class` currently carrying `marker`.
    pub fn marked(&self, class: &str, marker: &str) -> Vec<FakeElement> {
        self.elements_by_class(class)
            .into_iter()
            .filter(|el| el.has_class(marker))
            .collect()
    }
}

impl Dom for FakeDom {
    type Element = FakeElement;
    type Listener = FakeListener;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.elements
            .iter()
            .find(|el| el.id().as_deref() == Some(id))
            .cloned()
    }

    fn elements_by_class(&self, class: &str) -> Vec<FakeElement> {
        self.elements
            .iter()
            .filter(|el| el.has_class(class))
            .cloned()
            .collect()
    }

    fn on_click(&self, element: &FakeElement, handler: Box<dyn FnMut()>) -> FakeListener {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        element
            .0
            .handlers
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(handler))));
        FakeListener {
            element: element.clone(),
            id,
        }
    }
}

/// The primer design form as [`FormLayout::default`](crate::FormLayout)
/// expects it: every group populated, QC panel hidden, nothing active.
pub fn design_form() -> FakeDom {
    let mut dom = FakeDom::new();
    let groups: [(&str, &str, &[&str]); 5] = [
        ("mode-input", "mode-btn", &["single", "multi"]),
        ("primer-type-input", "primer-type-btn", &["default", "custom"]),
        ("reference-input", "reference-btn", &["hg19", "hg38"]),
        ("probe-input", "probe-btn", &["no", "yes"]),
        ("methylation-input", "methylation-btn", &["no", "yes"]),
    ];
    for (field_id, button_class, values) in groups {
        dom.add(FakeElement::new("input").with_id(field_id));
        for value in values {
            dom.add(
                FakeElement::new("button")
                    .with_class(button_class)
                    .with_attr("data-value", value),
            );
        }
    }
    dom.add(FakeElement::new("div").with_id("single-section"));
    dom.add(
        FakeElement::new("div")
            .with_id("multi-section")
            .with_class("hidden"),
    );
    dom.add(
        FakeElement::new("button")
            .with_id("qc-toggle")
            .with_text("Show QC Thresholds ▼"),
    );
    dom.add(
        FakeElement::new("div")
            .with_id("qc-panel")
            .with_class("hidden"),
    );
    dom
}
