//! Operator table literals, one map entry per line.

use super::Style;
use crate::model::OperatorEntry;

pub fn line(entry: &OperatorEntry, style: Style) -> String {
    let OperatorEntry {
        token,
        opcode,
        argc,
        function,
    } = entry;

    match style {
        Style::Go => format!("\"{token}\": []Operator{{{{{opcode:#x}, {argc}, nil, \"{function}\"}}}},"),
        _ => format!("\"{token}\": [Operator{{{opcode:#x}, {argc}, nil, \"{function}\"}}],"),
    }
}

pub fn render(entries: &[OperatorEntry], style: Style) -> String {
    let mut out = entries
        .iter()
        .map(|e| line(e, style))
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}
