pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use std::io::Write;

use anyhow::Context;
use clap::Parser;

use crate::config::GeneratorConfig;
use crate::model::OperatorEntry;
use crate::parser::HeaderLines;

pub use crate::error::GenError;

/// Header text → validated operator table.
pub fn generate(
    header: &HeaderLines,
    cfg: &GeneratorConfig,
    deny_duplicates: bool,
) -> anyhow::Result<Vec<OperatorEntry>> {
    let range = parser::locate(header, &cfg.anchor_start, &cfg.anchor_end)
        .with_context(|| "Locating declarations")?;
    let decls =
        parser::declarations(header, range, cfg).with_context(|| "Parsing declarations")?;

    let entries = processor::run(&decls, cfg).with_context(|| "Assigning opcodes")?;
    processor::validate::validate(&entries, deny_duplicates)
        .with_context(|| "Validating operator table")?;
    Ok(entries)
}

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let cfg = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Loading config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    // 1. ── Parse ──────────────────────────────────────────────────────
    let header = HeaderLines::load(&args.header)
        .with_context(|| format!("Reading {}", args.header.display()))?;

    // 2. ── Process ────────────────────────────────────────────────────
    let entries = generate(&header, &cfg, args.deny_duplicates)?;

    // 3. ── Write outputs ──────────────────────────────────────────────
    if let Some(path) = &args.populate {
        writer::c::populate_file(path, &entries)
            .with_context(|| format!("Populating {}", path.display()))?;
    }

    let text = writer::render(&entries, args.style).with_context(|| "Rendering table")?;
    std::io::stdout()
        .lock()
        .write_all(text.as_bytes())
        .with_context(|| "Writing to stdout")?;

    Ok(())
}
