use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_HEADER;
use crate::writer::Style;

/// Generate the operator lookup table from libjit's instruction header.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Header declaring the `jit_insn_*` functions
    #[arg(default_value = DEFAULT_HEADER)]
    pub header: PathBuf,
    /// JSON file overriding the built-in tables
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output format printed to stdout
    #[arg(long, value_enum, default_value_t = Style::Table)]
    pub style: Style,
    /// C source whose maintained block is rewritten with dispatch lines
    #[arg(long)]
    pub populate: Option<PathBuf>,
    /// Fail instead of warning when a display token is emitted twice
    #[arg(long)]
    pub deny_duplicates: bool,
}
