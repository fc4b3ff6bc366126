//! Turns parsed declarations into operator table rows.
//!
//! Rule order per declaration: exclusion → mapping → prefix rename →
//! wrapper substitution → alias expansion. Every emitted alias consumes
//! one opcode.
pub mod rename;
pub mod validate;

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{GenError, Result};
use crate::model::{Declaration, OperatorEntry};

pub fn run(decls: &[Declaration], cfg: &GeneratorConfig) -> Result<Vec<OperatorEntry>> {
    let mut entries: Vec<OperatorEntry> = Vec::new();
    // `None` once the previous entry took `u32::MAX`
    let mut next = Some(cfg.start_opcode);

    for decl in decls {
        if cfg.excludes.contains(&decl.name) {
            debug!("line {}: `{}` excluded", decl.line_no, decl.name);
            continue;
        }

        let mapped = cfg.mapping.get(&decl.name).unwrap_or(&decl.name);
        let name = rename::rename(mapped);

        let function = cfg.wrapped.get(&decl.full_name).unwrap_or(&decl.full_name);

        let tokens = match cfg.aliases.get(&name) {
            Some(aliases) => aliases.clone(),
            None => vec![name],
        };

        for token in tokens {
            let Some(opcode) = next else {
                return Err(GenError::OpcodeOverflow {
                    token,
                    last: u32::MAX,
                });
            };
            debug!("{opcode:#x} `{token}` -> {function}");
            entries.push(OperatorEntry {
                token,
                opcode,
                argc: decl.argc,
                function: function.clone(),
            });
            next = opcode.checked_add(1);
        }
    }

    info!("emitted {} operators", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(full_name: &str, argc: u8) -> Declaration {
        Declaration {
            line_no: 1,
            full_name: full_name.into(),
            name: full_name.splitn(3, '_').nth(2).unwrap().into(),
            argc,
        }
    }

    #[test]
    fn test_alias_and_wrapper() {
        let cfg = GeneratorConfig::default();
        let entries = run(
            &[decl("jit_insn_eq", 2), decl("jit_insn_to_not_bool", 1)],
            &cfg,
        )
        .unwrap();

        let rows: Vec<_> = entries
            .iter()
            .map(|e| (e.token.as_str(), e.opcode, e.argc, e.function.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("==", 0x40, 2, "gruel_insn_eq"),
                ("=", 0x41, 2, "gruel_insn_eq"),
                ("!", 0x42, 1, "jit_insn_to_not_bool"),
            ]
        );
    }

    #[test]
    fn test_prefix_rules_after_mapping() {
        let cfg = GeneratorConfig::default();
        let entries = run(
            &[
                decl("jit_insn_to_bool", 1),
                decl("jit_insn_is_inf", 1),
                decl("jit_insn_pow", 2),
                decl("jit_insn_cmpg", 2),
            ],
            &cfg,
        )
        .unwrap();

        let tokens: Vec<_> = entries.iter().map(|e| (e.token.as_str(), e.opcode)).collect();
        assert_eq!(
            tokens,
            vec![
                ("->bool", 0x40),
                ("inf?", 0x41),
                ("pow", 0x42),
                ("**", 0x43),
                ("cmpg", 0x44),
            ]
        );
        assert!(entries[2..4].iter().all(|e| e.function == "jit_insn_pow"));
    }

    #[test]
    fn test_excluded_names_consume_no_opcode() {
        let mut cfg = GeneratorConfig::default();
        cfg.excludes.insert("abs".into());
        cfg.start_opcode = 0x10;

        let entries = run(
            &[decl("jit_insn_min", 2), decl("jit_insn_abs", 1), decl("jit_insn_max", 2)],
            &cfg,
        )
        .unwrap();

        let tokens: Vec<_> = entries.iter().map(|e| (e.token.as_str(), e.opcode)).collect();
        assert_eq!(tokens, vec![("min", 0x10), ("max", 0x11)]);
    }

    #[test]
    fn test_exclusion_uses_short_name_before_mapping() {
        let mut cfg = GeneratorConfig::default();
        cfg.excludes.insert("==".into());

        let entries = run(&[decl("jit_insn_eq", 2)], &cfg).unwrap();
        assert_eq!(entries.len(), 2, "`==` is a mapped name, not a short name");

        cfg.excludes.insert("eq".into());
        assert!(run(&[decl("jit_insn_eq", 2)], &cfg).unwrap().is_empty());
    }

    #[test]
    fn test_last_opcode_is_usable() {
        let cfg = GeneratorConfig {
            start_opcode: u32::MAX,
            ..GeneratorConfig::default()
        };

        let entries = run(&[decl("jit_insn_abs", 1)], &cfg).unwrap();
        assert_eq!(entries[0].opcode, u32::MAX);
    }

    #[test]
    fn test_opcode_overflow_is_an_error() {
        let cfg = GeneratorConfig {
            start_opcode: u32::MAX,
            ..GeneratorConfig::default()
        };

        // `==` expands to two aliases, the second has no opcode left
        match run(&[decl("jit_insn_eq", 2)], &cfg).unwrap_err() {
            GenError::OpcodeOverflow { token, last } => {
                assert_eq!(token, "=");
                assert_eq!(last, u32::MAX);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
