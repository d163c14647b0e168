//! Exclusive button row with its hidden input

use crate::layout::ToggleGroupSpec;
use dioxus::prelude::*;

/// One choice in a toggle row
#[derive(Clone, PartialEq)]
pub struct ToggleOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl ToggleOption {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// A hidden input plus one button per option, marked up the way
/// [`ToggleGroupController`](crate::ToggleGroupController) expects.
///
/// Values are always rendered as `data-value`.
#[component]
pub fn ToggleButtons(
    spec: ToggleGroupSpec,
    options: Vec<ToggleOption>,
    selected: String,
    active_class: String,
) -> Element {
    rsx! {
        div { class: "flex gap-1 bg-gray-800/50 rounded-lg p-1",
            input {
                r#type: "hidden",
                id: "{spec.field_id}",
                name: "{spec.name}",
                value: "{selected}",
            }
            for option in &options {
                button {
                    r#type: "button",
                    class: button_class(&spec.button_class, &active_class, option.value == selected),
                    "data-value": option.value,
                    "{option.label}"
                }
            }
        }
    }
}

fn button_class(group_class: &str, active_class: &str, selected: bool) -> String {
    let base = "px-3 py-1.5 text-sm rounded";
    if selected {
        format!("{base} {group_class} {active_class}")
    } else {
        format!("{base} {group_class}")
    }
}
