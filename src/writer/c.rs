//! Emit the C dispatch block and keep it up to date inside a C source file.
//!
//! The block lives between two marker comments:
//!
//! ```text
//! //@start maintained by jit-opgen
//! // `==`(2)
//! BINARY_OP(0x40, gruel_insn_eq);
//! //@end maintained by jit-opgen
//! ```

use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::error::{GenError, Result};
use crate::model::OperatorEntry;

pub const BLOCK_START: &str = "//@start maintained by jit-opgen";
pub const BLOCK_END: &str = "//@end maintained by jit-opgen";

/// One commented `UNARY_OP`/`BINARY_OP` line pair per entry, sorted by opcode.
pub fn dispatch_block(entries: &[OperatorEntry], indent: &str) -> Result<String> {
    dispatch_block_with_eol(entries, indent, "\n")
}

fn dispatch_block_with_eol(entries: &[OperatorEntry], indent: &str, eol: &str) -> Result<String> {
    let mut sorted: Vec<&OperatorEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.opcode);

    let mut out = String::new();
    for e in sorted {
        let unsupported = || GenError::UnsupportedOperator {
            token: e.token.clone(),
            opcode: e.opcode,
        };
        if e.function.starts_with(':') {
            return Err(unsupported());
        }
        let mac = match e.argc {
            1 => "UNARY_OP ",
            2 => "BINARY_OP",
            _ => return Err(unsupported()),
        };

        out.push_str(&format!("{indent}// `{}`({}){eol}", e.token, e.argc));
        out.push_str(&format!(
            "{indent}{mac}(0x{:02x}, {});{eol}",
            e.opcode, e.function
        ));
    }
    Ok(out)
}

/// Replaces the contents of the single maintained block in `source`.
///
/// Lines outside the block keep their original terminators; generated lines
/// use the start marker's (`\r\n` or `\n`).
pub fn populate(source: &str, entries: &[OperatorEntry]) -> Result<String> {
    let mut output = String::with_capacity(source.len());
    let mut lines = source.split_inclusive('\n').enumerate();
    let mut populated = false;

    while let Some((idx, line)) = lines.next() {
        output.push_str(line);

        if !line.contains(BLOCK_START) {
            continue;
        }
        if populated {
            return Err(GenError::MultipleBlocks);
        }

        let end = lines
            .by_ref()
            .map(|(_, next)| next)
            .find(|next| next.contains(BLOCK_END))
            .ok_or(GenError::MissingBlockEnd { line_no: idx + 1 })?;

        let eol = if line.ends_with("\r\n") { "\r\n" } else { "\n" };
        let indent_end = line
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(line.len());
        output.push_str(&dispatch_block_with_eol(entries, &line[..indent_end], eol)?);
        output.push_str(end);
        populated = true;
    }

    if !populated {
        return Err(GenError::NoMaintainedBlock);
    }
    Ok(output)
}

/// [`populate`] applied to a file on disk, rewritten in place.
pub fn populate_file(path: &Path, entries: &[OperatorEntry]) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path).map_err(|source| GenError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let updated = populate(&source, entries)?;
    std::fs::write(path, updated).with_context(|| format!("Writing {}", path.display()))?;
    info!("populated {} with {} operators", path.display(), entries.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(token: &str, opcode: u32, argc: u8, function: &str) -> OperatorEntry {
        OperatorEntry {
            token: token.into(),
            opcode,
            argc,
            function: function.into(),
        }
    }

    fn table() -> Vec<OperatorEntry> {
        vec![
            entry("!", 0x4a, 1, "jit_insn_to_not_bool"),
            entry("==", 0x40, 2, "gruel_insn_eq"),
        ]
    }

    #[test]
    fn test_dispatch_block_sorted_by_opcode() {
        let block = dispatch_block(&table(), "    ").unwrap();
        assert_eq!(
            block,
            "    // `==`(2)\n\
             \x20   BINARY_OP(0x40, gruel_insn_eq);\n\
             \x20   // `!`(1)\n\
             \x20   UNARY_OP (0x4a, jit_insn_to_not_bool);\n"
        );
    }

    #[test]
    fn test_dispatch_block_rejects_helper_calls() {
        let entries = [entry("len", 0x80, 1, ":i:gruel_strlen")];
        assert!(matches!(
            dispatch_block(&entries, ""),
            Err(GenError::UnsupportedOperator { opcode: 0x80, .. })
        ));
    }

    #[test]
    fn test_populate_replaces_block() {
        let source = "switch (op) {\n\
                      \x20 //@start maintained by jit-opgen\n\
                      \x20 stale();\n\
                      \x20 //@end maintained by jit-opgen\n\
                      }\n";
        let out = populate(source, &table()).unwrap();
        assert_eq!(
            out,
            "switch (op) {\n\
             \x20 //@start maintained by jit-opgen\n\
             \x20 // `==`(2)\n\
             \x20 BINARY_OP(0x40, gruel_insn_eq);\n\
             \x20 // `!`(1)\n\
             \x20 UNARY_OP (0x4a, jit_insn_to_not_bool);\n\
             \x20 //@end maintained by jit-opgen\n\
             }\n"
        );
    }

    #[test]
    fn test_populate_keeps_crlf() {
        let source = "int a;\r\n\
                      //@start maintained by jit-opgen\r\n\
                      //@end maintained by jit-opgen\r\n\
                      int b;";
        let out = populate(source, &table()).unwrap();
        assert_eq!(
            out,
            "int a;\r\n\
             //@start maintained by jit-opgen\r\n\
             // `==`(2)\r\n\
             BINARY_OP(0x40, gruel_insn_eq);\r\n\
             // `!`(1)\r\n\
             UNARY_OP (0x4a, jit_insn_to_not_bool);\r\n\
             //@end maintained by jit-opgen\r\n\
             int b;"
        );
    }

    #[test]
    fn test_populate_errors() {
        assert!(matches!(
            populate("int x;\n", &table()),
            Err(GenError::NoMaintainedBlock)
        ));
        assert!(matches!(
            populate("a\n//@start maintained by jit-opgen\nb\n", &table()),
            Err(GenError::MissingBlockEnd { line_no: 2 })
        ));

        let twice = format!("{BLOCK_START}\n{BLOCK_END}\n{BLOCK_START}\n{BLOCK_END}\n");
        assert!(matches!(
            populate(&twice, &table()),
            Err(GenError::MultipleBlocks)
        ));
    }
}
