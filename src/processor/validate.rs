//! Sanity checks over a finished operator table.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{GenError, Result};
use crate::model::OperatorEntry;

/// Rejects reused opcodes. Reused display tokens are logged, or rejected
/// when `deny_duplicates` is set.
pub fn validate(entries: &[OperatorEntry], deny_duplicates: bool) -> Result<()> {
    let mut opcodes: HashMap<u32, &str> = HashMap::new();
    let mut tokens: HashMap<&str, u32> = HashMap::new();

    for entry in entries {
        if let Some(other) = opcodes.insert(entry.opcode, &entry.token) {
            return Err(GenError::ConflictingOpcode {
                opcode: entry.opcode,
                token: entry.token.clone(),
                other: other.to_string(),
            });
        }

        if let Some(&first) = tokens.get(entry.token.as_str()) {
            let err = GenError::DuplicateDisplayToken {
                token: entry.token.clone(),
                first,
                second: entry.opcode,
            };
            if deny_duplicates {
                return Err(err);
            }
            warn!("{err}");
        } else {
            tokens.insert(&entry.token, entry.opcode);
        }
    }

    Ok(())
}
