//! qpcr-common - Form vocabulary shared by the browser controls
//!
//! Pure types with no DOM or I/O: the submitted form fields and their
//! server-side defaults, the design mode, and panel label pairs.

mod form_field;
mod form_selection;
mod mode;
mod panel_labels;

pub use form_field::FormField;
pub use form_selection::FormSelection;
pub use mode::{Mode, SINGLE_MODE_VALUE};
pub use panel_labels::PanelLabels;
