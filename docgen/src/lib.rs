//! UD-Japanese rule-table documentation generator.
//!
//! Renders the two YAML rule files of the UD-Japanese conversion pipeline —
//! the word-level POS assignment table and the dependency-relation (DEPREL)
//! assignment table — into standalone HTML documents whose rows describe
//! every rule in natural-language Japanese, in file (priority) order.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//! use udrule_docgen::generate;
//!
//! generate(
//!     Path::new("conf/pos_rule.yaml"),
//!     Path::new("conf/dep_rule.yaml"),
//!     Path::new("tmpl/"),
//!     Path::new("POS.html"),
//!     Path::new("DEPREL.html"),
//! )
//! .expect("Rule-table generation failed");
//! ```
//!
//! # Structure
//!
//! ```text
//! POS.html     ← one row per POS rule entry: fixed condition columns + 付与UPOS
//! DEPREL.html  ← one row per priority group: condition list + 付与DEPREL
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod deprel;
pub mod error;
pub mod loader;
pub mod pos;
pub mod renderer;
pub mod writer;

use std::path::Path;

use anyhow::Result;

use renderer::Table;
use udrule_vocab::Field;

pub use error::{Error, LoadError, RenderError};

/// Title of the generated POS table document.
pub const POS_TITLE: &str = "日本語UDにおけるPOS変換規則の一覧";
/// Title of the generated DEPREL table document.
pub const DEP_TITLE: &str = "日本語UDにおけるDEPREL変換規則の一覧";

/// Result-column label of the POS table.
const POS_RESULT_COLUMN: &str = "付与UPOS";
/// Header of the DEPREL table.
const DEP_HEADER: [&str; 2] = ["ルール", "付与DEPREL"];

/// Machine-readable column identifiers exposed to the template.
const POS_ORDERS: [&str; 7] = ["id", "suw", "origin", "luw", "btype", "pupos", "upos"];
const DEP_ORDERS: [&str; 3] = ["id", "rule", "deprel"];

/// Static description block shared by both tables. Already-constructed HTML,
/// inserted into the template unescaped.
const DESCRIPTION: &str = r#"
    <ul>
        <li>対象の単語について条件を満たすものを割り当てる</li>
        <li>上位のものを優先的に割り当てる</li>
        <li>文節タイプ：係り受け情報と文節における位置づけ（主辞や機能語）をラベルづけしたもの</li>
        <ul>
            <li>ROOT: ルート</li>
            <li>SEM_HEAD: 内容語の主辞</li>
            <li>CONT: 主辞ではない内容語</li>
            <li>SYN_HEAD: 機能語の主辞</li>
            <li>FUNC: SYN_HEAD以外の機能語</li>
            <li>NO_HEAD: 上記以外</li>
        </ul>
        <li>文法種類</li>
        <ul>
            <li>文節情報から「体言」「用言」あるいは「コピュラ」かを抽出している</li>
        </ul>
    </ul>
"#;

/// Generates both rule-table HTML documents.
///
/// Loads, interprets, and renders both tables in memory first, then writes
/// the two output files. Any failure aborts before the first write, so a
/// failed run never leaves partial output behind.
///
/// # Errors
///
/// Returns an error when either rule file cannot be loaded, a rule falls
/// outside the closed vocabulary, the template cannot be filled, or an
/// output file cannot be written.
pub fn generate(
    pos_rules: &Path,
    dep_rules: &Path,
    tmpl_folder: &Path,
    pos_out: &Path,
    dep_out: &Path,
) -> Result<()> {
    let pos_doc = loader::load_pos_rules(pos_rules)?;
    let pos_rows = pos::interpret(&pos_doc, pos_rules)?;
    let mut pos_header: Vec<&str> = Field::COLUMNS.iter().map(|f| f.column()).collect();
    pos_header.push(POS_RESULT_COLUMN);
    let pos_html = renderer::render(
        &Table {
            title: POS_TITLE,
            desc: DESCRIPTION,
            header: &pos_header,
            orders: &POS_ORDERS,
            rows: pos_rows,
        },
        tmpl_folder,
    )?;

    let dep_doc = loader::load_dep_rules(dep_rules)?;
    let dep_rows = deprel::interpret(&dep_doc, dep_rules)?;
    let dep_html = renderer::render(
        &Table {
            title: DEP_TITLE,
            desc: DESCRIPTION,
            header: &DEP_HEADER,
            orders: &DEP_ORDERS,
            rows: dep_rows,
        },
        tmpl_folder,
    )?;

    // Both documents rendered; only now touch the filesystem.
    writer::write_html(pos_out, &pos_html)?;
    writer::write_html(dep_out, &dep_html)?;
    Ok(())
}
