//! The primer design form page body

use super::qc_panel::QcPanel;
use super::toggle_buttons::{ToggleButtons, ToggleOption};
use crate::layout::{FormLayout, ToggleGroupSpec};
use dioxus::prelude::*;
use qpcr_common::{FormField, Mode};

/// Choices offered for each toggle-backed field.
pub fn options_for(field: FormField) -> Vec<ToggleOption> {
    match field {
        FormField::Mode => vec![
            ToggleOption::new("Single region", "single"),
            ToggleOption::new("Multiple regions", "multi"),
        ],
        FormField::PrimerType => vec![
            ToggleOption::new("Default", "default"),
            ToggleOption::new("Custom", "custom"),
        ],
        FormField::Reference => vec![
            ToggleOption::new("hg19", "hg19"),
            ToggleOption::new("hg38", "hg38"),
        ],
        FormField::Probe | FormField::Methylation => vec![
            ToggleOption::new("No", "no"),
            ToggleOption::new("Yes", "yes"),
        ],
    }
}

fn label_for(field: FormField) -> &'static str {
    match field {
        FormField::Mode => "Mode",
        FormField::PrimerType => "Primer type",
        FormField::Reference => "Reference",
        FormField::Probe => "Probe",
        FormField::Methylation => "Methylation",
    }
}

#[component]
fn FieldRow(spec: ToggleGroupSpec, active_class: String) -> Element {
    let Some(field) = FormField::from_name(&spec.name) else {
        return rsx! {};
    };
    let label = label_for(field);

    rsx! {
        div { class: "flex items-center gap-4",
            span { class: "w-28 text-sm text-gray-400", "{label}" }
            ToggleButtons {
                spec,
                options: options_for(field),
                selected: field.default_value().to_string(),
                active_class,
            }
        }
    }
}

/// The full design form. Each section carries the ids from `layout`; the
/// initial section visibility matches the default mode.
#[component]
pub fn PrimerDesignForm(layout: FormLayout) -> Element {
    let hidden = layout.markers.hidden.clone();
    let active = layout.markers.active.clone();
    let default_mode = Mode::from_value(FormField::Mode.default_value());
    let single_class = if default_mode.shows_single_section() { "" } else { hidden.as_str() };
    let multi_class = if default_mode.shows_multi_section() { "" } else { hidden.as_str() };

    rsx! {
        form {
            action: "/design/form",
            method: "post",
            enctype: "multipart/form-data",
            class: "space-y-4 p-6 bg-gray-900 text-white rounded-lg",

            FieldRow { spec: layout.mode.group.clone(), active_class: active.clone() }

            div { id: "{layout.mode.single_section_id}", class: "grid grid-cols-4 gap-3 {single_class}",
                input { r#type: "text", name: "chrom", placeholder: "chr1" }
                input { r#type: "number", name: "start", placeholder: "start" }
                input { r#type: "number", name: "end", placeholder: "end" }
                input { r#type: "text", name: "name", placeholder: "name (optional)" }
            }
            div { id: "{layout.mode.multi_section_id}", class: "{multi_class}",
                input { r#type: "file", name: "file", accept: ".xlsx,.xls" }
            }

            for spec in layout.groups.iter().cloned() {
                FieldRow { key: "{spec.name}", spec, active_class: active.clone() }
            }

            QcPanel { spec: layout.qc_panel.clone(), markers: layout.markers.clone() }

            button {
                r#type: "submit",
                class: "px-4 py-2 rounded bg-blue-600 text-white",
                "Design primers"
            }
        }
    }
}
