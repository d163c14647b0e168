//! DOM capabilities the controllers need
//!
//! Look elements up, read and write values, text and class markers, and
//! attach click handlers. Nothing else on the page is reachable from the
//! controllers.

/// A handle to one element. Cloning yields another handle to the same node.
pub trait DomElement: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;

    /// Current value of a form control; empty for other elements.
    fn value(&self) -> String;
    fn set_value(&self, value: &str);

    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// A document the controllers can query and attach listeners to.
pub trait Dom {
    type Element: DomElement;

    /// Keeps a click handler attached. Dropping it detaches the handler.
    type Listener;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    fn on_click(&self, element: &Self::Element, handler: Box<dyn FnMut()>) -> Self::Listener;
}
