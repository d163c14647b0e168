//! [`Dom`] over the browser document

use crate::dom::{Dom, DomElement};
use crate::form::{bind_form, BoundForm};
use crate::layout::{FormLayout, LAYOUT_SCRIPT_ID};
use crate::wasm_utils::EventListener;
use std::cell::RefCell;
use wasm_bindgen_x::JsCast;

thread_local! {
    /// Controllers bound on the current page. They live until unload.
    static PAGE_FORM: RefCell<Option<BoundForm<WebDom>>> = const { RefCell::new(None) };
}

#[derive(Clone)]
pub struct WebDom {
    document: web_sys_x::Document,
}

impl WebDom {
    pub fn new(document: web_sys_x::Document) -> Self {
        Self { document }
    }

    /// The document of the current window, if there is one.
    pub fn current() -> Option<Self> {
        web_sys_x::window()
            .and_then(|w| w.document())
            .map(Self::new)
    }

    /// Layout embedded in the page, or the default layout when there is none.
    pub fn layout(&self) -> FormLayout {
        match self
            .document
            .get_element_by_id(LAYOUT_SCRIPT_ID)
            .and_then(|script| script.text_content())
        {
            Some(json) if !json.trim().is_empty() => FormLayout::from_json_or_default(&json),
            _ => FormLayout::default(),
        }
    }
}

impl DomElement for web_sys_x::Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn value(&self) -> String {
        stored_value(
            self.dyn_ref::<web_sys_x::HtmlInputElement>()
                .map(|input| input.value()),
            || self.get_attribute("value"),
        )
    }

    fn set_value(&self, value: &str) {
        match self.dyn_ref::<web_sys_x::HtmlInputElement>() {
            Some(input) => input.set_value(value),
            None => {
                let _ = self.set_attribute("value", value);
            }
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// Inputs report their live value; anything else keeps it in the `value`
/// attribute, which is where `set_value` writes it.
fn stored_value(
    input_value: Option<String>,
    attribute: impl FnOnce() -> Option<String>,
) -> String {
    input_value.or_else(attribute).unwrap_or_default()
}

impl Dom for WebDom {
    type Element = web_sys_x::Element;
    type Listener = EventListener;

    fn element_by_id(&self, id: &str) -> Option<web_sys_x::Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<web_sys_x::Element> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn on_click(&self, element: &web_sys_x::Element, mut handler: Box<dyn FnMut()>) -> EventListener {
        EventListener::new(element.as_ref(), "click", move || handler())
    }
}

/// Bind the design form on `dom` for the rest of the page's life.
///
/// Binding again replaces the previous controllers, so one element set never
/// ends up with two listeners.
pub fn bind_page(dom: &WebDom, layout: &FormLayout) {
    let form = bind_form(dom, layout);
    PAGE_FORM.with(|slot| {
        slot.replace(Some(form));
    });
}

/// The current page's form selection, if the page has been bound.
pub fn page_selection() -> Option<qpcr_common::FormSelection> {
    PAGE_FORM.with(|slot| slot.borrow().as_ref().map(BoundForm::selection))
}
