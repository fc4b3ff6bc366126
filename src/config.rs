//! Generator tables and knobs.
//!
//! Everything here has a built-in default matching libjit's `jit-insn.h`;
//! a JSON file passed with `--config` overrides individual keys.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{GenError, Result};

pub const DEFAULT_HEADER: &str = "libjit/include/jit/jit-insn.h";
pub const DEFAULT_START_OPCODE: u32 = 0x40;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Short name → canonical symbol, applied before the prefix rules.
    pub mapping: HashMap<String, String>,
    /// Canonical symbol → every token it is emitted under, in order.
    pub aliases: HashMap<String, Vec<String>>,
    /// Full function name → function actually called.
    pub wrapped: HashMap<String, String>,
    pub excludes: HashSet<String>,
    pub start_opcode: u32,
    pub anchor_start: String,
    pub anchor_end: String,
    /// Return type every qualifying declaration line starts with.
    pub decl_prefix: String,
    /// Parameter name that marks a binary instruction.
    pub argc_marker: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let mapping = [
            ("eq", "=="),
            ("ne", "!="),
            ("lt", "<"),
            ("le", "<="),
            ("gt", ">"),
            ("ge", ">="),
            ("to_not_bool", "!"),
        ];
        let aliases = [("==", vec!["==", "="]), ("pow", vec!["pow", "**"])];
        let wrapped = [
            ("jit_insn_eq", "gruel_insn_eq"),
            ("jit_insn_ne", "gruel_insn_ne"),
        ];

        Self {
            mapping: owned_pairs(&mapping),
            aliases: aliases
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
                .collect(),
            wrapped: owned_pairs(&wrapped),
            excludes: HashSet::new(),
            start_opcode: DEFAULT_START_OPCODE,
            anchor_start: "jit_insn_eq".into(),
            anchor_end: "jit_insn_sign".into(),
            decl_prefix: "jit_value_t".into(),
            argc_marker: "value2".into(),
        }
    }
}

fn owned_pairs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file; keys it leaves out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GenError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
