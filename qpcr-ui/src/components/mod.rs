//! Markup for the design form
//!
//! These components only render. Selection and visibility are driven by the
//! controllers once they are bound to the rendered elements, so nothing here
//! reads signals or re-renders on click.

pub mod design_form;
pub mod qc_panel;
pub mod toggle_buttons;

pub use design_form::PrimerDesignForm;
pub use qc_panel::{QcPanel, ThresholdField, QC_THRESHOLD_FIELDS};
pub use toggle_buttons::{ToggleButtons, ToggleOption};
