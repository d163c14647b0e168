//! Exclusive button group bound to a hidden input
//!
//! Clicking a button writes its value attribute into the hidden field and
//! moves the active marker onto it. After every click exactly one button is
//! active and the field mirrors its value.

use crate::dom::{Dom, DomElement};
use crate::layout::{Markers, ToggleGroupSpec};
use std::rc::Rc;
use tracing::{debug, trace};

/// Called with the selected value after the group has been updated
pub type SelectHook = Box<dyn Fn(&str)>;

pub(crate) struct ToggleGroup<E> {
    name: String,
    field: E,
    buttons: Vec<E>,
    value_attribute: String,
    active_class: String,
    on_select: Option<SelectHook>,
}

impl<E: DomElement> ToggleGroup<E> {
    fn select(&self, button: &E) {
        // A button without the attribute submits an empty value.
        let value = button.attribute(&self.value_attribute).unwrap_or_default();
        self.field.set_value(&value);

        for b in &self.buttons {
            b.remove_class(&self.active_class);
        }
        button.add_class(&self.active_class);

        trace!(group = %self.name, value = %value, "Selected");

        if let Some(hook) = &self.on_select {
            hook(&value);
        }
    }

    fn value_of(&self, button: &E) -> String {
        button.attribute(&self.value_attribute).unwrap_or_default()
    }
}

/// A bound toggle group. Dropping it detaches the click listeners.
pub struct ToggleGroupController<D: Dom> {
    group: Rc<ToggleGroup<D::Element>>,
    _listeners: Vec<D::Listener>,
}

impl<D: Dom> ToggleGroupController<D> {
    /// Bind the group described by `spec`.
    ///
    /// Returns `None` without attaching anything when the hidden field or
    /// every button is missing from the page.
    pub fn bind(
        dom: &D,
        spec: &ToggleGroupSpec,
        markers: &Markers,
        on_select: Option<SelectHook>,
    ) -> Option<Self> {
        let Some(field) = dom.element_by_id(&spec.field_id) else {
            debug!(group = %spec.name, field_id = %spec.field_id, "Hidden field missing, group inert");
            return None;
        };
        let buttons = dom.elements_by_class(&spec.button_class);
        if buttons.is_empty() {
            debug!(group = %spec.name, class = %spec.button_class, "No buttons found, group inert");
            return None;
        }

        let group = Rc::new(ToggleGroup {
            name: spec.name.clone(),
            field,
            buttons,
            value_attribute: spec.value_attribute.clone(),
            active_class: markers.active.clone(),
            on_select,
        });

        let listeners = group
            .buttons
            .iter()
            .map(|button| {
                let group = group.clone();
                let clicked = button.clone();
                dom.on_click(button, Box::new(move || group.select(&clicked)))
            })
            .collect();

        debug!(group = %spec.name, buttons = group.buttons.len(), "Bound toggle group");

        Some(Self {
            group,
            _listeners: listeners,
        })
    }

    /// Select the first button whose value is `value`. Returns false, leaving
    /// the group untouched, when no button carries it.
    pub fn select_value(&self, value: &str) -> bool {
        match self
            .group
            .buttons
            .iter()
            .find(|button| self.group.value_of(button) == value)
        {
            Some(button) => {
                self.group.select(button);
                true
            }
            None => false,
        }
    }

    /// Value of the button currently carrying the active marker.
    pub fn active_value(&self) -> Option<String> {
        self.group
            .buttons
            .iter()
            .find(|button| button.has_class(&self.group.active_class))
            .map(|button| self.group.value_of(button))
    }

    /// What the hidden field will submit.
    pub fn value(&self) -> String {
        self.group.field.value()
    }

    pub fn name(&self) -> &str {
        &self.group.name
    }

    pub fn len(&self) -> usize {
        self.group.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group.buttons.is_empty()
    }
}
