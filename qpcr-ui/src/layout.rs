//! Element ids and classes the form controllers bind to
//!
//! [`FormLayout::default`] describes the primer design page. A page can
//! override any part of it by embedding JSON in a
//! `<script type="application/json" id="qpcr-form-layout">` element; fields
//! left out keep their defaults.

use qpcr_common::{FormField, PanelLabels, SINGLE_MODE_VALUE};
use serde::{Deserialize, Serialize};

/// Id of the optional script element carrying a JSON layout override
pub const LAYOUT_SCRIPT_ID: &str = "qpcr-form-layout";

/// The only two classes the controllers ever add or remove
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub active: String,
    pub hidden: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            active: "active".to_string(),
            hidden: "hidden".to_string(),
        }
    }
}

/// One exclusive button group bound to a hidden input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleGroupSpec {
    /// Used in log output only
    pub name: String,
    pub field_id: String,
    pub button_class: String,
    #[serde(default = "default_value_attribute")]
    pub value_attribute: String,
}

fn default_value_attribute() -> String {
    "data-value".to_string()
}

impl ToggleGroupSpec {
    pub fn new(
        name: impl Into<String>,
        field_id: impl Into<String>,
        button_class: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_id: field_id.into(),
            button_class: button_class.into(),
            value_attribute: default_value_attribute(),
        }
    }

    /// Group for a form field, using `<field>-input` and `<field>-btn`.
    pub fn for_field(field: FormField) -> Self {
        let stem = field.name().replace('_', "-");
        Self::new(field.name(), format!("{stem}-input"), format!("{stem}-btn"))
    }
}

/// The mode group plus the two sections it switches between
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeSpec {
    pub group: ToggleGroupSpec,
    pub single_value: String,
    pub single_section_id: String,
    pub multi_section_id: String,
}

impl Default for ModeSpec {
    fn default() -> Self {
        Self {
            group: ToggleGroupSpec::for_field(FormField::Mode),
            single_value: SINGLE_MODE_VALUE.to_string(),
            single_section_id: "single-section".to_string(),
            multi_section_id: "multi-section".to_string(),
        }
    }
}

/// A show/hide control and the region it drives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSpec {
    pub toggle_id: String,
    pub region_id: String,
    pub collapsed_label: String,
    pub expanded_label: String,
}

impl PanelSpec {
    pub fn labels(&self) -> PanelLabels {
        PanelLabels::new(self.collapsed_label.clone(), self.expanded_label.clone())
    }
}

impl Default for PanelSpec {
    fn default() -> Self {
        let labels = PanelLabels::qc_thresholds();
        Self {
            toggle_id: "qc-toggle".to_string(),
            region_id: "qc-panel".to_string(),
            collapsed_label: labels.collapsed,
            expanded_label: labels.expanded,
        }
    }
}

/// Everything [`bind_form`](crate::bind_form) needs to wire one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLayout {
    pub markers: Markers,
    pub mode: ModeSpec,
    pub groups: Vec<ToggleGroupSpec>,
    pub qc_panel: PanelSpec,
}

impl Default for FormLayout {
    fn default() -> Self {
        Self {
            markers: Markers::default(),
            mode: ModeSpec::default(),
            groups: [
                FormField::PrimerType,
                FormField::Reference,
                FormField::Probe,
                FormField::Methylation,
            ]
            .into_iter()
            .map(ToggleGroupSpec::for_field)
            .collect(),
            qc_panel: PanelSpec::default(),
        }
    }
}

impl FormLayout {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse an override, falling back to the default layout when it is
    /// malformed.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(layout) => layout,
            Err(e) => {
                tracing::warn!("Ignoring malformed form layout override: {e}");
                Self::default()
            }
        }
    }

    /// Spec of the group bound to `field`, including the mode group.
    pub fn group_for(&self, field: FormField) -> Option<&ToggleGroupSpec> {
        std::iter::once(&self.mode.group)
            .chain(self.groups.iter())
            .find(|spec| spec.name == field.name())
    }
}
