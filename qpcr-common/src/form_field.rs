/// A hidden input on the design form backed by a toggle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Mode,
    PrimerType,
    Reference,
    Probe,
    Methylation,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Mode,
        FormField::PrimerType,
        FormField::Reference,
        FormField::Probe,
        FormField::Methylation,
    ];

    /// Name the field is submitted under.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mode => "mode",
            Self::PrimerType => "primer_type",
            Self::Reference => "reference",
            Self::Probe => "probe",
            Self::Methylation => "methylation",
        }
    }

    /// Value the server assumes when the field is not sent.
    pub fn default_value(self) -> &'static str {
        match self {
            Self::Mode => "single",
            Self::PrimerType => "default",
            Self::Reference => "hg19",
            Self::Probe => "no",
            Self::Methylation => "no",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}
