/// Inclusive window of header line indices the generator scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRange {
    pub start: usize,
    pub end: usize,
}

impl ScanRange {
    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// One `jit_value_t jit_insn_*` declaration as found in the header,
/// before any renaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// 1-based, for diagnostics.
    pub line_no: usize,
    pub full_name: String,
    /// `full_name` minus its first two `_` segments.
    pub name: String,
    pub argc: u8,
}

/// A single row of the generated operator table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorEntry {
    pub token: String,
    pub opcode: u32,
    pub argc: u8,
    pub function: String,
}
