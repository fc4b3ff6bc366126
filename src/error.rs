//! Error type shared by every generator stage.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("cannot read header `{}`", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("anchor `{anchor}` not found in header")]
    AnchorNotFound { anchor: String },

    #[error("malformed declaration at line {line_no}: `{line}`")]
    MalformedDeclaration { line_no: usize, line: String },

    #[error("display token `{token}` emitted twice (opcodes {first:#x} and {second:#x})")]
    DuplicateDisplayToken {
        token: String,
        first: u32,
        second: u32,
    },

    #[error("conflicting opcode {opcode:#x} for `{token}` and `{other}`")]
    ConflictingOpcode {
        opcode: u32,
        token: String,
        other: String,
    },

    #[error("no opcode left for `{token}` after {last:#x}")]
    OpcodeOverflow { token: String, last: u32 },

    #[error("unrecognized operator `{token}`:{opcode:#x}")]
    UnsupportedOperator { token: String, opcode: u32 },

    #[error("no maintained block found")]
    NoMaintainedBlock,

    #[error("maintained block starting at line {line_no} has no end marker")]
    MissingBlockEnd { line_no: usize },

    #[error("multiple maintained blocks")]
    MultipleBlocks,

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
