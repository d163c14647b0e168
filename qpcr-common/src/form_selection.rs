use crate::{FormField, Mode};

/// The choices a submitted design form carries.
///
/// Built from whatever the hidden inputs currently hold. A field that is
/// missing or still empty resolves to the server-side default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSelection {
    pub mode: String,
    pub primer_type: String,
    pub reference: String,
    pub probe: String,
    pub methylation: String,
}

impl Default for FormSelection {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl FormSelection {
    pub fn from_lookup(mut lookup: impl FnMut(FormField) -> Option<String>) -> Self {
        let mut resolve = |field: FormField| {
            lookup(field)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| field.default_value().to_string())
        };
        Self {
            mode: resolve(FormField::Mode),
            primer_type: resolve(FormField::PrimerType),
            reference: resolve(FormField::Reference),
            probe: resolve(FormField::Probe),
            methylation: resolve(FormField::Methylation),
        }
    }

    pub fn mode(&self) -> Mode {
        Mode::from_value(&self.mode)
    }

    /// Probe design is requested; otherwise the server designs zero probes.
    pub fn probe_enabled(&self) -> bool {
        self.probe == "yes"
    }

    /// Design against the bisulfite-converted template.
    pub fn bisulfite(&self) -> bool {
        self.methylation == "yes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_server_defaults() {
        let selection = FormSelection::default();
        assert_eq!(selection.mode, "single");
        assert_eq!(selection.primer_type, "default");
        assert_eq!(selection.reference, "hg19");
        assert_eq!(selection.probe, "no");
        assert_eq!(selection.methylation, "no");
        assert_eq!(selection.mode(), Mode::Single);
    }

    #[test]
    fn test_empty_values_resolve_to_defaults() {
        let selection = FormSelection::from_lookup(|field| match field {
            FormField::Reference => Some("hg38".into()),
            _ => Some(String::new()),
        });
        assert_eq!(selection.reference, "hg38");
        assert_eq!(selection.probe, "no");
        assert_eq!(selection.mode, "single");
    }

    #[test]
    fn test_flags() {
        let selection = FormSelection::from_lookup(|field| match field {
            FormField::Mode => Some("multi".into()),
            FormField::Probe => Some("yes".into()),
            FormField::Methylation => Some("yes".into()),
            _ => None,
        });
        assert_eq!(selection.mode(), Mode::Multiple);
        assert!(selection.probe_enabled());
        assert!(selection.bisulfite());
        assert!(!FormSelection::default().probe_enabled());
        assert!(!FormSelection::default().bisulfite());
    }
}
