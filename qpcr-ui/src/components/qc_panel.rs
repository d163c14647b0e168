//! Collapsible QC threshold inputs

use crate::layout::{Markers, PanelSpec};
use dioxus::prelude::*;

/// A numeric primer/probe setting submitted with the form
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ThresholdField {
    pub name: &'static str,
    pub label: &'static str,
    pub step: &'static str,
}

const fn field(name: &'static str, label: &'static str, step: &'static str) -> ThresholdField {
    ThresholdField { name, label, step }
}

/// Settings shown inside the QC panel, in display order.
pub const QC_THRESHOLD_FIELDS: [ThresholdField; 21] = [
    field("min_amplicon_length", "Min amplicon length", "1"),
    field("max_amplicon_length", "Max amplicon length", "1"),
    field("n_primers", "Primer pairs", "1"),
    field("primer_opt_length", "Primer opt length", "1"),
    field("primer_min_length", "Primer min length", "1"),
    field("primer_max_length", "Primer max length", "1"),
    field("primer_opt_gc", "Primer opt GC %", "0.1"),
    field("primer_min_gc", "Primer min GC %", "0.1"),
    field("primer_max_gc", "Primer max GC %", "0.1"),
    field("n_probes", "Probes", "1"),
    field("min_primer_probe_tm_diff", "Min primer/probe Tm diff", "0.1"),
    field("max_primer_probe_tm_diff", "Max primer/probe Tm diff", "0.1"),
    field("probe_opt_length", "Probe opt length", "1"),
    field("probe_min_length", "Probe min length", "1"),
    field("probe_max_length", "Probe max length", "1"),
    field("probe_opt_tm", "Probe opt Tm", "0.1"),
    field("probe_min_tm", "Probe min Tm", "0.1"),
    field("probe_max_tm", "Probe max Tm", "0.1"),
    field("probe_opt_gc", "Probe opt GC %", "0.1"),
    field("probe_min_gc", "Probe min GC %", "0.1"),
    field("probe_max_gc", "Probe max GC %", "0.1"),
];

/// Toggle control and threshold region, starting collapsed.
#[component]
pub fn QcPanel(spec: PanelSpec, markers: Markers) -> Element {
    rsx! {
        div { class: "space-y-2",
            button {
                r#type: "button",
                id: "{spec.toggle_id}",
                class: "text-sm text-gray-400 hover:text-white",
                "{spec.collapsed_label}"
            }
            div {
                id: "{spec.region_id}",
                class: "grid grid-cols-3 gap-3 {markers.hidden}",
                for f in QC_THRESHOLD_FIELDS {
                    label { class: "flex flex-col text-xs text-gray-400 gap-1",
                        "{f.label}"
                        input {
                            r#type: "number",
                            name: f.name,
                            step: f.step,
                            class: "bg-gray-800/50 rounded px-2 py-1 text-gray-300",
                        }
                    }
                }
            }
        }
    }
}
