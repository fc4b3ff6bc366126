//! Prefix-driven display-name rewrites.

/// How a matched name is rewritten; the argument is the part after the prefix.
#[derive(Debug, Clone, Copy)]
pub enum Rewrite {
    /// `to_bool` → `->bool`
    Conversion,
    /// `is_nan` → `nan?`
    Predicate,
}

#[derive(Debug, Clone, Copy)]
pub struct RenameRule {
    pub prefix: &'static str,
    pub rewrite: Rewrite,
}

/// Checked in order; the first matching prefix wins.
pub const RENAME_RULES: &[RenameRule] = &[
    RenameRule {
        prefix: "to_",
        rewrite: Rewrite::Conversion,
    },
    RenameRule {
        prefix: "is_",
        rewrite: Rewrite::Predicate,
    },
];

impl RenameRule {
    pub fn apply(&self, name: &str) -> Option<String> {
        let rest = name.strip_prefix(self.prefix)?;
        Some(match self.rewrite {
            Rewrite::Conversion => format!("->{rest}"),
            Rewrite::Predicate => format!("{rest}?"),
        })
    }
}

/// Runs `name` through [`RENAME_RULES`], returning it unchanged if none match.
pub fn rename(name: &str) -> String {
    RENAME_RULES
        .iter()
        .find_map(|rule| rule.apply(name))
        .unwrap_or_else(|| name.to_string())
}
