/// Value the mode group submits for single-region design
pub const SINGLE_MODE_VALUE: &str = "single";

/// Which region input section the form shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One region entered by chrom/start/end
    Single,
    /// Many regions uploaded as a spreadsheet
    Multiple,
}

impl Mode {
    /// Anything other than the single sentinel selects the multi-region section.
    pub fn from_value(value: &str) -> Self {
        if value == SINGLE_MODE_VALUE {
            Mode::Single
        } else {
            Mode::Multiple
        }
    }

    pub fn shows_single_section(self) -> bool {
        self == Mode::Single
    }

    pub fn shows_multi_section(self) -> bool {
        self == Mode::Multiple
    }
}
