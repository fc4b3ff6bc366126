pub mod c;
pub mod table;

use clap::ValueEnum;

use crate::error::Result;
use crate::model::OperatorEntry;

/// Shape of the lines printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Style {
    /// `"==": [Operator{0x40, 2, nil, "gruel_insn_eq"}],`
    #[default]
    Table,
    /// `"==": []Operator{{0x40, 2, nil, "gruel_insn_eq"}},`
    Go,
    /// `BINARY_OP(0x40, gruel_insn_eq);` dispatch lines
    C,
}

/// Renders the whole table as newline-joined text with a trailing newline.
pub fn render(entries: &[OperatorEntry], style: Style) -> Result<String> {
    match style {
        Style::Table | Style::Go => Ok(table::render(entries, style)),
        Style::C => c::dispatch_block(entries, ""),
    }
}
