//! Interprets the POS rule set into display rows.
//!
//! Each entry becomes one row over the fixed condition columns plus the
//! assigned UPOS label. A field absent from an entry renders as an empty
//! cell; a field *name* outside the vocabulary is fatal.

use std::collections::BTreeMap;
use std::path::Path;

use udrule_vocab::Field;

use crate::error::Error;
use crate::loader::PosRuleDoc;
use crate::renderer::Html;

/// Renders every entry of `doc` into a display row aligned to
/// [`Field::COLUMNS`] plus the result column.
///
/// The displayed result is the comma-joined full result sequence.
///
/// # Errors
///
/// Returns [`Error::RuleFormat`] naming the offending field and entry index
/// when a condition field name is not in the vocabulary.
pub fn interpret(doc: &PosRuleDoc, path: &Path) -> Result<Vec<Vec<Html>>, Error> {
    let mut rows = Vec::with_capacity(doc.rule.len());
    for (index, entry) in doc.rule.iter().enumerate() {
        let mut values: BTreeMap<Field, String> = BTreeMap::new();
        for (name, value) in &entry.0 {
            let field = Field::parse(name).map_err(|source| Error::RuleFormat {
                path: path.to_path_buf(),
                index,
                source,
            })?;
            values.insert(field, value.to_string());
        }
        let mut row: Vec<Html> = Field::COLUMNS
            .iter()
            .map(|field| Html::text(values.get(field).map_or("", String::as_str)))
            .collect();
        row.push(Html::text(&entry.1.join(",")));
        rows.push(row);
    }
    Ok(rows)
}
