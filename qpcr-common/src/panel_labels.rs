/// Control label text for a two-state panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLabels {
    /// Shown while the panel is hidden
    pub collapsed: String,
    /// Shown while the panel is visible
    pub expanded: String,
}

impl PanelLabels {
    pub fn new(collapsed: impl Into<String>, expanded: impl Into<String>) -> Self {
        Self {
            collapsed: collapsed.into(),
            expanded: expanded.into(),
        }
    }

    /// Labels for the QC thresholds panel on the design form.
    pub fn qc_thresholds() -> Self {
        Self::new("Show QC Thresholds ▼", "Hide QC Thresholds ▲")
    }

    pub fn label_for(&self, hidden: bool) -> &str {
        if hidden {
            &self.collapsed
        } else {
            &self.expanded
        }
    }
}
