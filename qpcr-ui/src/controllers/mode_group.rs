//! The design mode group
//!
//! A toggle group that also swaps the single-region and multi-region input
//! sections. Visibility before the first click is whatever the markup says.

use super::toggle_group::{SelectHook, ToggleGroupController};
use crate::dom::{Dom, DomElement};
use crate::layout::{Markers, ModeSpec};
use qpcr_common::Mode;

pub struct ModeGroupController<D: Dom> {
    group: ToggleGroupController<D>,
    single_value: String,
}

impl<D: Dom> ModeGroupController<D> {
    /// Bind the mode group. Inert under the same conditions as a plain
    /// toggle group; a missing section is skipped when switching.
    pub fn bind(dom: &D, spec: &ModeSpec, markers: &Markers) -> Option<Self> {
        let single = dom.element_by_id(&spec.single_section_id);
        let multi = dom.element_by_id(&spec.multi_section_id);
        if single.is_none() || multi.is_none() {
            tracing::debug!(
                single = single.is_some(),
                multi = multi.is_some(),
                "Mode section missing"
            );
        }

        let hook = section_switch(spec.single_value.clone(), markers.hidden.clone(), single, multi);
        let group = ToggleGroupController::bind(dom, &spec.group, markers, Some(hook))?;

        Some(Self {
            group,
            single_value: spec.single_value.clone(),
        })
    }

    pub fn select_value(&self, value: &str) -> bool {
        self.group.select_value(value)
    }

    /// Mode of the active button, if one is active.
    pub fn mode(&self) -> Option<Mode> {
        self.group
            .active_value()
            .map(|value| mode_for(&self.single_value, &value))
    }

    pub fn value(&self) -> String {
        self.group.value()
    }
}

fn mode_for(single_value: &str, value: &str) -> Mode {
    if value == single_value {
        Mode::Single
    } else {
        Mode::Multiple
    }
}

fn section_switch<E: DomElement>(
    single_value: String,
    hidden_class: String,
    single: Option<E>,
    multi: Option<E>,
) -> SelectHook {
    Box::new(move |value| {
        let mode = mode_for(&single_value, value);
        set_visible(single.as_ref(), mode.shows_single_section(), &hidden_class);
        set_visible(multi.as_ref(), mode.shows_multi_section(), &hidden_class);
    })
}

fn set_visible<E: DomElement>(section: Option<&E>, visible: bool, hidden_class: &str) {
    let Some(section) = section else {
        return;
    };
    if visible {
        section.remove_class(hidden_class);
    } else {
        section.add_class(hidden_class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_dom::{FakeDom, FakeElement};
    use crate::layout::ToggleGroupSpec;

    fn mode_dom(values: &[&str]) -> FakeDom {
        let mut dom = FakeDom::new();
        dom.add(FakeElement::new("input").with_id("mode-input"));
        for value in values {
            dom.add(
                FakeElement::new("button")
                    .with_class("mode-btn")
                    .with_attr("data-value", value),
            );
        }
        dom.add(FakeElement::new("div").with_id("single-section"));
        dom.add(FakeElement::new("div").with_id("multi-section"));
        dom
    }

    #[test]
    fn test_single_then_multi_scenario() {
        let dom = mode_dom(&["single", "multi-a", "multi-b"]);
        let mode =
            ModeGroupController::bind(&dom, &ModeSpec::default(), &Markers::default()).unwrap();
        assert_eq!(mode.mode(), None);
        assert_eq!(mode.value(), "");

        dom.button("mode-btn", "multi-a").click();
        assert_eq!(dom.get("mode-input").value(), "multi-a");
        let active = dom.marked("mode-btn", "active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].attribute("data-value").as_deref(), Some("multi-a"));
        assert!(dom.get("single-section").has_class("hidden"));
        assert!(!dom.get("multi-section").has_class("hidden"));
        assert_eq!(mode.mode(), Some(Mode::Multiple));

        dom.button("mode-btn", "single").click();
        assert_eq!(dom.get("mode-input").value(), "single");
        let active = dom.marked("mode-btn", "active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].attribute("data-value").as_deref(), Some("single"));
        assert!(!dom.get("single-section").has_class("hidden"));
        assert!(dom.get("multi-section").has_class("hidden"));
        assert_eq!(mode.mode(), Some(Mode::Single));
    }

    #[test]
    fn test_every_non_single_value_shows_multi() {
        let dom = mode_dom(&["single", "multi-a", "multi-b"]);
        let mode =
            ModeGroupController::bind(&dom, &ModeSpec::default(), &Markers::default()).unwrap();
        for value in ["multi-b", "single", "multi-a", "multi-b"] {
            assert!(mode.select_value(value));
            let single_hidden = dom.get("single-section").has_class("hidden");
            let multi_hidden = dom.get("multi-section").has_class("hidden");
            assert_ne!(single_hidden, multi_hidden);
            assert_eq!(single_hidden, value != "single");
        }
    }

    #[test]
    fn test_initial_visibility_left_to_markup() {
        let dom = mode_dom(&["single", "multi"]);
        dom.get("multi-section").add_class("hidden");
        let _mode =
            ModeGroupController::bind(&dom, &ModeSpec::default(), &Markers::default()).unwrap();
        assert!(!dom.get("single-section").has_class("hidden"));
        assert!(dom.get("multi-section").has_class("hidden"));
    }

    #[test]
    fn test_missing_section_still_switches_the_other() {
        let mut dom = FakeDom::new();
        dom.add(FakeElement::new("input").with_id("mode-input"));
        let multi_btn = dom.add(
            FakeElement::new("button")
                .with_class("mode-btn")
                .with_attr("data-value", "multi"),
        );
        dom.add(FakeElement::new("div").with_id("single-section"));
        let _mode =
            ModeGroupController::bind(&dom, &ModeSpec::default(), &Markers::default()).unwrap();

        multi_btn.click();
        assert!(dom.get("single-section").has_class("hidden"));
        assert_eq!(dom.get("mode-input").value(), "multi");
    }

    #[test]
    fn test_custom_sentinel() {
        let dom = mode_dom(&["one", "many"]);
        let spec = ModeSpec {
            single_value: "one".to_string(),
            ..ModeSpec::default()
        };
        let mode = ModeGroupController::bind(&dom, &spec, &Markers::default()).unwrap();
        mode.select_value("one");
        assert_eq!(mode.mode(), Some(Mode::Single));
        assert!(dom.get("multi-section").has_class("hidden"));
    }

    #[test]
    fn test_inert_without_buttons() {
        let dom = mode_dom(&[]);
        let spec = ModeSpec {
            group: ToggleGroupSpec::new("mode", "mode-input", "mode-btn"),
            ..ModeSpec::default()
        };
        assert!(ModeGroupController::bind(&dom, &spec, &Markers::default()).is_none());
        assert_eq!(dom.listener_count(), 0);
    }
}
