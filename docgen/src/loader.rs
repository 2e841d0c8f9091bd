//! Loads the YAML rule documents into typed structures.
//!
//! The rule format forbids literal tabs inside its structured syntax, so the
//! loader replaces every horizontal tab with four spaces before handing the
//! text to the YAML parser. Each rule file is loaded at most once per run.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// The dependency-relation rule document (`order_rule` top-level key).
#[derive(Debug, Deserialize)]
pub struct DepRuleDoc {
    /// Priority groups in file order. File order encodes rule priority and
    /// is preserved verbatim through to the rendered table.
    pub order_rule: Vec<PriorityGroup>,
}

/// One dependency-rule priority group: ANDed conditions and the DEPREL label
/// assigned when all of them hold.
#[derive(Debug, Deserialize)]
pub struct PriorityGroup {
    /// The condition tuples, all of which must hold.
    pub rule: Vec<Condition>,
    /// The resulting dependency-relation label.
    pub res: String,
}

/// One condition tuple, serialized as a two-element YAML sequence of
/// function key and comparison argument.
#[derive(Debug, Deserialize)]
pub struct Condition(
    /// Function key of the form `operator_scope_feature`.
    pub String,
    /// Comparison argument.
    pub Argument,
);

/// A condition's comparison argument: a single value or an alternative set.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Argument {
    /// A single comparison value.
    One(Scalar),
    /// An ordered alternative set, rendered as a comma-joined list.
    Many(Vec<Scalar>),
}

impl Argument {
    /// Renders the argument for display. A sequence joins its elements with
    /// literal commas and no conjunction, matching the "is one of" phrasing
    /// of the membership operator.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Argument::One(value) => value.to_string(),
            Argument::Many(values) => values
                .iter()
                .map(Scalar::to_string)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// A YAML scalar comparison value. Rule files compare against strings almost
/// everywhere, but `depnum` conditions compare against bare integers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A string value.
    Text(String),
    /// An integer value (e.g. a dependency-target index).
    Number(i64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
        }
    }
}

/// The POS rule document (`rule` top-level key).
#[derive(Debug, Deserialize)]
pub struct PosRuleDoc {
    /// Rule entries in file order.
    pub rule: Vec<PosEntry>,
}

/// One POS rule entry, serialized as a two-element YAML sequence of a
/// field-to-value mapping and the resulting tag sequence.
#[derive(Debug, Deserialize)]
pub struct PosEntry(
    /// Condition fields: rule-file field name to attribute value.
    pub std::collections::BTreeMap<String, Scalar>,
    /// The resulting tag sequence.
    pub Vec<String>,
);

/// Loads the dependency-relation rule document from `path`.
///
/// # Errors
///
/// Returns [`Error::Load`] when the file is missing, unreadable, or not
/// valid YAML with an `order_rule` sequence.
pub fn load_dep_rules(path: &Path) -> Result<DepRuleDoc, Error> {
    parse(path, &read_normalized(path)?)
}

/// Loads the POS rule document from `path`.
///
/// # Errors
///
/// Returns [`Error::Load`] when the file is missing, unreadable, or not
/// valid YAML with a `rule` sequence.
pub fn load_pos_rules(path: &Path) -> Result<PosRuleDoc, Error> {
    parse(path, &read_normalized(path)?)
}

/// Reads the file as UTF-8 and normalizes tabs to four spaces.
fn read_normalized(path: &Path) -> Result<String, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    Ok(text.replace('\t', "    "))
}

/// Parses normalized YAML text into a typed rule document.
fn parse<T: for<'de> Deserialize<'de>>(path: &Path, text: &str) -> Result<T, Error> {
    serde_yaml::from_str(text).map_err(|source: serde_yaml::Error| Error::Load {
        path: path.to_path_buf(),
        source: source.into(),
    })
}
