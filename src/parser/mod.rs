//! Line-based scanning of the instruction header.
//!
//! There is no C grammar here: a declaration is any line starting with the
//! configured return type, e.g.
//!
//! ```text
//! jit_value_t jit_insn_add
//!     (jit_function_t func, jit_value_t value1, jit_value_t value2) JIT_NOTHROW;
//! ```
//!
//! and the parameter list may sit on the same line or the next one.

use std::path::Path;

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::model::{Declaration, ScanRange};

/// The header, split into lines once and never touched again.
#[derive(Debug, Clone)]
pub struct HeaderLines {
    lines: Vec<String>,
}

impl HeaderLines {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(String::from).collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GenError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let header = Self::from_text(&text);
        info!("loaded {} ({} lines)", path.display(), header.len());
        Ok(header)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// Index of the first line containing `word`.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(word))
    }
}

/// Finds the lines between the two anchors.
///
/// The window runs from the start anchor's line through the line *after*
/// the end anchor's line (clamped to the file), so a declaration split
/// across two lines at the end anchor is still covered.
pub fn locate(header: &HeaderLines, anchor_start: &str, anchor_end: &str) -> Result<ScanRange> {
    let start = header
        .index_of(anchor_start)
        .ok_or_else(|| GenError::AnchorNotFound {
            anchor: anchor_start.to_string(),
        })?;
    let end = header
        .index_of(anchor_end)
        .ok_or_else(|| GenError::AnchorNotFound {
            anchor: anchor_end.to_string(),
        })?;

    let range = ScanRange {
        start,
        end: (end + 1).min(header.len() - 1),
    };
    info!("scanning lines {}..={}", range.start + 1, range.end + 1);
    Ok(range)
}

/// Parses every declaration inside `range`, in header order.
pub fn declarations(
    header: &HeaderLines,
    range: ScanRange,
    cfg: &GeneratorConfig,
) -> Result<Vec<Declaration>> {
    let mut decls = Vec::new();

    for idx in range.indices() {
        let Some(line) = header.get(idx) else { break };
        if !line.starts_with(&cfg.decl_prefix) {
            continue;
        }
        let decl = parse_declaration(line, header.get(idx + 1), idx + 1, &cfg.argc_marker)?;
        debug!(
            "line {}: {} -> {} (argc {})",
            decl.line_no, decl.full_name, decl.name, decl.argc
        );
        decls.push(decl);
    }

    Ok(decls)
}

/// Parses one declaration line; `next` is only consulted for the
/// argument-count marker.
pub fn parse_declaration(
    line: &str,
    next: Option<&str>,
    line_no: usize,
    argc_marker: &str,
) -> Result<Declaration> {
    let malformed = || GenError::MalformedDeclaration {
        line_no,
        line: line.to_string(),
    };

    let full_name = line
        .split(' ')
        .nth(1)
        .map(function_name)
        .filter(|name| !name.is_empty())
        .ok_or_else(malformed)?;

    let name = full_name.splitn(3, '_').nth(2).ok_or_else(malformed)?;

    let binary = line.contains(argc_marker) || next.is_some_and(|n| n.contains(argc_marker));

    Ok(Declaration {
        line_no,
        full_name: full_name.to_string(),
        name: name.to_string(),
        argc: if binary { 2 } else { 1 },
    })
}

/// `jit_insn_eq(jit_function_t` → `jit_insn_eq`
fn function_name(token: &str) -> &str {
    let token = token.trim();
    let token = token.split('(').next().unwrap_or(token);
    token.trim_matches(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
}
