//! Fills the HTML table template from interpreted display rows.
//!
//! Escaping happens at the [`Html`] type boundary: every cell is either
//! escaped text or a fragment that was assembled from the fixed vocabulary
//! by an interpreter. The template inserts cells verbatim (triple-stache),
//! so the one intentional raw-HTML injection point — the conditions-list
//! cell of the DEPREL table — is visible in the types rather than by
//! convention.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{Error, RenderError};

/// File name of the table template inside the template folder.
pub const TEMPLATE_NAME: &str = "_tmpl.html.hbs";

/// A pre-escaped HTML fragment.
///
/// Construct with [`Html::text`] for plain strings (escaped on entry) or
/// [`Html::raw`] for markup assembled from trusted, already-escaped parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Html(String);

impl Html {
    /// Wraps plain text, escaping HTML metacharacters.
    #[must_use]
    pub fn text(s: &str) -> Self {
        Html(escape_html(s))
    }

    /// Wraps an already-constructed HTML fragment without escaping.
    ///
    /// The caller is responsible for having escaped any embedded text.
    #[must_use]
    pub fn raw(s: impl Into<String>) -> Self {
        Html(s.into())
    }

    /// Returns the fragment as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Escapes HTML special characters in a string.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// One rule table ready for template substitution.
#[derive(Debug)]
pub struct Table<'a> {
    /// Document and page title.
    pub title: &'a str,
    /// Static HTML description block shown above the table.
    pub desc: &'a str,
    /// Column labels, in display order.
    pub header: &'a [&'a str],
    /// Machine-readable column identifiers exposed to the template.
    pub orders: &'a [&'a str],
    /// Display rows; every row must align with `header`.
    pub rows: Vec<Vec<Html>>,
}

/// Template substitution context. Field names are the placeholder names the
/// template exposes.
#[derive(Serialize)]
struct TableContext<'a> {
    title: &'a str,
    desc: &'a str,
    header: &'a [&'a str],
    orders: &'a [&'a str],
    record: &'a [Vec<Html>],
}

/// Renders a table into a standalone HTML document string.
///
/// Pure transform: the caller writes the returned document to storage.
///
/// # Errors
///
/// Returns [`Error::Render`] when a row's cell count mismatches the header,
/// when the template file is missing or malformed, or when substitution
/// fails.
pub fn render(table: &Table<'_>, tmpl_folder: &Path) -> Result<String, Error> {
    for (index, row) in table.rows.iter().enumerate() {
        if row.len() != table.header.len() {
            return Err(render_error(
                table,
                RenderError::RowWidth {
                    index,
                    actual: row.len(),
                    expected: table.header.len(),
                },
            ));
        }
    }

    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_file("table", tmpl_folder.join(TEMPLATE_NAME))
        .map_err(|e| render_error(table, RenderError::Template(Box::new(e))))?;

    let context = TableContext {
        title: table.title,
        desc: table.desc,
        header: table.header,
        orders: table.orders,
        record: &table.rows,
    };
    registry
        .render("table", &context)
        .map_err(|e| render_error(table, RenderError::Substitute(e)))
}

fn render_error(table: &Table<'_>, source: RenderError) -> Error {
    Error::Render {
        table: table.title.to_string(),
        source,
    }
}
