//! Error taxonomy of the documentation generator.
//!
//! Every error is fatal: the tool either writes both HTML tables or writes
//! nothing at all.

use std::path::PathBuf;

use thiserror::Error;

use udrule_vocab::VocabError;

/// A fatal documentation-generation failure.
#[derive(Debug, Error)]
pub enum Error {
    /// The rule file is missing, unreadable, or not valid YAML.
    #[error("cannot load rule file {}: {source}", .path.display())]
    Load {
        /// Path of the offending rule file.
        path: PathBuf,
        /// What went wrong while reading or parsing.
        #[source]
        source: LoadError,
    },
    /// A rule references a symbol outside the closed vocabulary.
    #[error("rule {index} in {}: {source}", .path.display())]
    RuleFormat {
        /// Path of the offending rule file.
        path: PathBuf,
        /// Zero-based group/entry index within the rule file.
        index: usize,
        /// The vocabulary lookup that failed.
        #[source]
        source: VocabError,
    },
    /// Table assembly or template substitution failed.
    #[error("cannot render table \"{table}\": {source}")]
    Render {
        /// Title of the table being rendered.
        table: String,
        /// What went wrong during rendering.
        #[source]
        source: RenderError,
    },
}

/// Why a rule file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The file content is not valid YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Why a table could not be rendered.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A display row does not align with the table header.
    #[error("row {index} has {actual} cells, header has {expected}")]
    RowWidth {
        /// Zero-based row index.
        index: usize,
        /// Cell count of the offending row.
        actual: usize,
        /// Column count of the header.
        expected: usize,
    },
    /// The template file is missing or fails to compile.
    #[error(transparent)]
    Template(#[from] Box<handlebars::TemplateError>),
    /// Template substitution failed (e.g. a placeholder without data).
    #[error(transparent)]
    Substitute(#[from] handlebars::RenderError),
}
