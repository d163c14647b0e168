//! Wiring for the whole design form

use crate::controllers::{ModeGroupController, ToggleGroupController, VisibilityPanel};
use crate::dom::{Dom, DomElement};
use crate::layout::{FormLayout, ToggleGroupSpec};
use qpcr_common::{FormField, FormSelection};
use std::collections::HashSet;
use tracing::{info, warn};

/// Every controller bound on one page. Features whose elements were missing
/// are simply absent.
pub struct BoundForm<D: Dom> {
    pub mode: Option<ModeGroupController<D>>,
    pub groups: Vec<ToggleGroupController<D>>,
    pub qc_panel: Option<VisibilityPanel<D>>,
    hidden_fields: Vec<(FormField, D::Element)>,
}

/// Bind the mode group, the plain toggle groups and the QC panel described
/// by `layout`. Each one binds or stays inert independently.
///
/// A group reusing a hidden field or button class claimed by an earlier
/// group (the mode group first) is skipped, so no button gets two listeners.
pub fn bind_form<D: Dom>(dom: &D, layout: &FormLayout) -> BoundForm<D> {
    let markers = &layout.markers;
    let mut claimed = ClaimedElements::default();
    claimed.claim(&layout.mode.group);
    let mode = ModeGroupController::bind(dom, &layout.mode, markers);
    let groups: Vec<_> = layout
        .groups
        .iter()
        .filter(|spec| {
            let fresh = claimed.claim(spec);
            if !fresh {
                warn!(
                    group = %spec.name,
                    field_id = %spec.field_id,
                    class = %spec.button_class,
                    "Group reuses elements of an earlier group, skipping"
                );
            }
            fresh
        })
        .filter_map(|spec| ToggleGroupController::bind(dom, spec, markers, None))
        .collect();
    let qc_panel = VisibilityPanel::bind(dom, &layout.qc_panel, markers);

    let hidden_fields = FormField::ALL
        .into_iter()
        .filter_map(|field| {
            let spec = layout.group_for(field)?;
            dom.element_by_id(&spec.field_id).map(|el| (field, el))
        })
        .collect();

    info!(
        mode = mode.is_some(),
        groups = groups.len(),
        qc_panel = qc_panel.is_some(),
        "Bound design form"
    );

    BoundForm {
        mode,
        groups,
        qc_panel,
        hidden_fields,
    }
}

#[derive(Default)]
struct ClaimedElements {
    field_ids: HashSet<String>,
    button_classes: HashSet<String>,
}

impl ClaimedElements {
    /// Record the group's elements; false when either was already taken.
    fn claim(&mut self, spec: &ToggleGroupSpec) -> bool {
        if self.field_ids.contains(&spec.field_id)
            || self.button_classes.contains(&spec.button_class)
        {
            return false;
        }
        self.field_ids.insert(spec.field_id.clone());
        self.button_classes.insert(spec.button_class.clone());
        true
    }
}

impl<D: Dom> BoundForm<D> {
    /// The plain toggle group named `name`.
    pub fn group(&self, name: &str) -> Option<&ToggleGroupController<D>> {
        self.groups.iter().find(|group| group.name() == name)
    }

    /// What the form would submit right now, with unset fields resolved to
    /// their server defaults.
    pub fn selection(&self) -> FormSelection {
        FormSelection::from_lookup(|field| {
            self.hidden_fields
                .iter()
                .find(|(f, _)| *f == field)
                .map(|(_, el)| el.value())
        })
    }

    /// Number of features that found their elements.
    pub fn bound_count(&self) -> usize {
        usize::from(self.mode.is_some()) + self.groups.len() + usize::from(self.qc_panel.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_dom::{design_form, FakeDom};
    use qpcr_common::Mode;

    #[test]
    fn test_binds_every_feature() {
        let dom = design_form();
        let form = bind_form(&dom, &FormLayout::default());
        assert_eq!(form.bound_count(), 6);
        // Two buttons per group plus the QC toggle.
        assert_eq!(dom.listener_count(), 11);
    }

    #[test]
    fn test_empty_page_binds_nothing() {
        let dom = FakeDom::new();
        let form = bind_form(&dom, &FormLayout::default());
        assert_eq!(form.bound_count(), 0);
        assert_eq!(dom.listener_count(), 0);
        assert_eq!(form.selection(), FormSelection::default());
    }

    #[test]
    fn test_selection_follows_clicks() {
        let dom = design_form();
        let form = bind_form(&dom, &FormLayout::default());
        assert_eq!(form.selection(), FormSelection::default());

        dom.button("mode-btn", "multi").click();
        dom.button("reference-btn", "hg38").click();
        dom.button("probe-btn", "yes").click();

        let selection = form.selection();
        assert_eq!(selection.mode(), Mode::Multiple);
        assert_eq!(selection.reference, "hg38");
        assert!(selection.probe_enabled());
        assert!(!selection.bisulfite());
        assert_eq!(selection.primer_type, "default");
    }

    #[test]
    fn test_group_lookup() {
        let dom = design_form();
        let form = bind_form(&dom, &FormLayout::default());
        let methylation = form.group("methylation").unwrap();
        assert!(methylation.select_value("yes"));
        assert!(form.selection().bisulfite());
        assert!(form.group("mode").is_none());
    }

    #[test]
    fn test_override_repeating_the_mode_group_binds_it_once() {
        let dom = design_form();
        let layout = FormLayout::from_json(
            r#"{ "groups": [
                { "name": "mode", "field_id": "mode-input", "button_class": "mode-btn" },
                { "name": "reference", "field_id": "reference-input", "button_class": "reference-btn" },
                { "name": "reference", "field_id": "ref-copy", "button_class": "reference-btn" }
            ] }"#,
        )
        .unwrap();
        let form = bind_form(&dom, &layout);

        assert!(form.mode.is_some());
        assert_eq!(form.groups.len(), 1);
        for value in ["single", "multi"] {
            assert_eq!(dom.button("mode-btn", value).listener_count(), 1);
        }
        for value in ["hg19", "hg38"] {
            assert_eq!(dom.button("reference-btn", value).listener_count(), 1);
        }

        dom.button("mode-btn", "multi").click();
        assert_eq!(dom.get("mode-input").value(), "multi");
        assert!(dom.get("single-section").has_class("hidden"));
    }

    #[test]
    fn test_dropping_form_detaches_everything() {
        let dom = design_form();
        let form = bind_form(&dom, &FormLayout::default());
        drop(form);
        assert_eq!(dom.listener_count(), 0);
    }
}
