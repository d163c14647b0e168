//! qpcr-ui - Browser controls for the primer design form
//!
//! Controllers are written against the [`Dom`] capability traits so the same
//! code drives the real page (`WebDom`) and the in-memory `FakeDom` used in
//! tests. The Dioxus components render markup matching the default
//! [`FormLayout`].

pub mod components;
pub mod controllers;
pub mod dom;
#[cfg(any(test, feature = "test-utils"))]
pub mod fake_dom;
pub mod form;
pub mod layout;
pub mod wasm_utils;
pub mod web_dom;

pub use components::*;
pub use controllers::{ModeGroupController, SelectHook, ToggleGroupController, VisibilityPanel};
pub use dom::{Dom, DomElement};
pub use form::{bind_form, BoundForm};
pub use layout::{FormLayout, Markers, ModeSpec, PanelSpec, ToggleGroupSpec, LAYOUT_SCRIPT_ID};
pub use web_dom::WebDom;
