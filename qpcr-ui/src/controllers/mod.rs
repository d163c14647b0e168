//! Controllers binding page elements to form behaviour

mod mode_group;
mod toggle_group;
mod visibility_panel;

pub use mode_group::ModeGroupController;
pub use toggle_group::{SelectHook, ToggleGroupController};
pub use visibility_panel::VisibilityPanel;
