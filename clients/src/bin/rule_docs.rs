//! `udrule-docs` — Renders the UD-Japanese conversion rule tables to HTML.
//!
//! **Outputs:**
//! - `POS.html` — one row per POS rule entry (fixed condition columns + 付与UPOS)
//! - `DEPREL.html` — one row per dependency-rule priority group (condition list + 付与DEPREL)
//!
//! **Usage:**
//! ```
//! udrule-docs <pos_rule_file> <dep_rule_file> [-t <tmpl-folder>] [-p <pos-out>] [-d <dep-out>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use udrule_docgen::generate;

/// Render the UD-Japanese POS and DEPREL conversion-rule tables to HTML.
#[derive(Parser)]
#[command(
    name = "udrule-docs",
    about = "Render the UD-Japanese POS and DEPREL conversion-rule tables to HTML"
)]
struct Args {
    /// POS rule file (YAML, `rule` top-level key).
    pos_rule_file: PathBuf,

    /// DEPREL rule file (YAML, `order_rule` top-level key).
    dep_rule_file: PathBuf,

    /// Folder containing the `_tmpl.html.hbs` table template.
    #[arg(short = 't', long, default_value = "tmpl/")]
    tmpl_folder: PathBuf,

    /// Output path for the POS table.
    #[arg(short = 'p', long, default_value = "POS.html")]
    save_pos_file: PathBuf,

    /// Output path for the DEPREL table.
    #[arg(short = 'd', long, default_value = "DEPREL.html")]
    save_dep_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    generate(
        &args.pos_rule_file,
        &args.dep_rule_file,
        &args.tmpl_folder,
        &args.save_pos_file,
        &args.save_dep_file,
    )?;

    println!("Rule tables generated successfully.");
    println!("  POS: {}", args.save_pos_file.display());
    println!("  DEPREL: {}", args.save_dep_file.display());

    Ok(())
}
