//! Show/hide panel driven by a single control

use crate::dom::{Dom, DomElement};
use crate::layout::{Markers, PanelSpec};
use qpcr_common::PanelLabels;
use std::rc::Rc;
use tracing::{debug, trace};

struct Panel<E> {
    control: E,
    region: E,
    labels: PanelLabels,
    hidden_class: String,
}

impl<E: DomElement> Panel<E> {
    fn is_hidden(&self) -> bool {
        self.region.has_class(&self.hidden_class)
    }

    fn toggle(&self) {
        let hidden = !self.is_hidden();
        if hidden {
            self.region.add_class(&self.hidden_class);
        } else {
            self.region.remove_class(&self.hidden_class);
        }
        self.control.set_text(self.labels.label_for(hidden));
        trace!(hidden, "Toggled panel");
    }
}

/// A bound show/hide panel. Dropping it detaches the click listener.
pub struct VisibilityPanel<D: Dom> {
    panel: Rc<Panel<D::Element>>,
    _listener: D::Listener,
}

impl<D: Dom> VisibilityPanel<D> {
    /// Returns `None` without attaching anything when the control or the
    /// region is missing.
    pub fn bind(dom: &D, spec: &PanelSpec, markers: &Markers) -> Option<Self> {
        let (Some(control), Some(region)) = (
            dom.element_by_id(&spec.toggle_id),
            dom.element_by_id(&spec.region_id),
        ) else {
            debug!(toggle_id = %spec.toggle_id, region_id = %spec.region_id, "Panel elements missing, panel inert");
            return None;
        };

        let panel = Rc::new(Panel {
            control,
            region,
            labels: spec.labels(),
            hidden_class: markers.hidden.clone(),
        });
        let listener = {
            let handle = panel.clone();
            dom.on_click(&panel.control, Box::new(move || handle.toggle()))
        };

        debug!(region_id = %spec.region_id, hidden = panel.is_hidden(), "Bound panel");

        Some(Self {
            panel,
            _listener: listener,
        })
    }

    /// Flip visibility and relabel the control. Two toggles restore the
    /// original state and label.
    pub fn toggle(&self) {
        self.panel.toggle();
    }

    pub fn is_hidden(&self) -> bool {
        self.panel.is_hidden()
    }

    pub fn label(&self) -> String {
        self.panel.control.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_dom::{FakeDom, FakeElement};

    fn qc_dom() -> FakeDom {
        let mut dom = FakeDom::new();
        dom.add(
            FakeElement::new("button")
                .with_id("qc-toggle")
                .with_text("Show QC Thresholds ▼"),
        );
        dom.add(FakeElement::new("div").with_id("qc-panel").with_class("hidden"));
        dom
    }

    #[test]
    fn test_qc_panel_scenario() {
        let dom = qc_dom();
        let panel = VisibilityPanel::bind(&dom, &PanelSpec::default(), &Markers::default()).unwrap();
        assert!(panel.is_hidden());

        panel.toggle();
        assert!(!panel.is_hidden());
        assert!(!dom.get("qc-panel").has_class("hidden"));
        assert_eq!(dom.get("qc-toggle").text(), "Hide QC Thresholds ▲");

        panel.toggle();
        assert!(dom.get("qc-panel").has_class("hidden"));
        assert_eq!(panel.label(), "Show QC Thresholds ▼");
    }

    #[test]
    fn test_click_toggles() {
        let dom = qc_dom();
        let _panel =
            VisibilityPanel::bind(&dom, &PanelSpec::default(), &Markers::default()).unwrap();
        assert_eq!(dom.listener_count(), 1);

        dom.get("qc-toggle").click();
        assert!(!dom.get("qc-panel").has_class("hidden"));
        dom.get("qc-toggle").click();
        assert!(dom.get("qc-panel").has_class("hidden"));
    }

    #[test]
    fn test_double_toggle_from_visible_restores() {
        let mut dom = FakeDom::new();
        dom.add(
            FakeElement::new("button")
                .with_id("qc-toggle")
                .with_text("Hide QC Thresholds ▲"),
        );
        dom.add(FakeElement::new("div").with_id("qc-panel"));
        let panel = VisibilityPanel::bind(&dom, &PanelSpec::default(), &Markers::default()).unwrap();

        panel.toggle();
        assert!(panel.is_hidden());
        assert_eq!(panel.label(), "Show QC Thresholds ▼");
        panel.toggle();
        assert!(!panel.is_hidden());
        assert_eq!(panel.label(), "Hide QC Thresholds ▲");
    }

    #[test]
    fn test_missing_region_is_inert() {
        let mut dom = FakeDom::new();
        dom.add(FakeElement::new("button").with_id("qc-toggle"));
        assert!(VisibilityPanel::bind(&dom, &PanelSpec::default(), &Markers::default()).is_none());
        assert_eq!(dom.listener_count(), 0);
    }

    #[test]
    fn test_missing_control_is_inert() {
        let mut dom = FakeDom::new();
        dom.add(FakeElement::new("div").with_id("qc-panel"));
        assert!(VisibilityPanel::bind(&dom, &PanelSpec::default(), &Markers::default()).is_none());
        assert_eq!(dom.listener_count(), 0);
    }
}
