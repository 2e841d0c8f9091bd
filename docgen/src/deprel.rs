//! Interprets the dependency-relation rule set into display rows.
//!
//! Each priority group becomes one row: a bulleted list of natural-language
//! condition sentences and the DEPREL label the group assigns. Groups render
//! in file order — file order encodes rule priority (earlier groups win when
//! a word matches several), so the output is never resorted, deduplicated,
//! or reordered.

use std::path::Path;

use udrule_vocab::FunctionKey;

use crate::error::Error;
use crate::loader::{Condition, DepRuleDoc};
use crate::renderer::{escape_html, Html};

/// Renders every priority group of `doc` into a display row of
/// `[conditions list, DEPREL label]`.
///
/// The conditions cell is the one intentionally raw HTML fragment of the
/// whole generator; its markup comes from the fixed vocabulary and its
/// embedded text (sentences, comparison values) is escaped here.
///
/// # Errors
///
/// Returns [`Error::RuleFormat`] naming the offending key and group index
/// when a condition's function key is malformed or references an unknown
/// vocabulary symbol. There is no partial rendering.
pub fn interpret(doc: &DepRuleDoc, path: &Path) -> Result<Vec<Vec<Html>>, Error> {
    let mut rows = Vec::with_capacity(doc.order_rule.len());
    for (index, group) in doc.order_rule.iter().enumerate() {
        let mut list = String::from("<ul>");
        for Condition(func, argument) in &group.rule {
            let key: FunctionKey = func.parse().map_err(|source| Error::RuleFormat {
                path: path.to_path_buf(),
                index,
                source,
            })?;
            let sentence = key.sentence(&argument.render());
            list.push_str("<li>");
            list.push_str(&escape_html(&sentence));
            list.push_str("</li>");
        }
        list.push_str("</ul>");
        rows.push(vec![Html::raw(list), Html::text(&group.res)]);
    }
    Ok(rows)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    use udrule_vocab::VocabError;

    fn doc(yaml: &str) -> DepRuleDoc {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn root_rule_renders_one_item_list() {
        let doc = doc(concat!(
            "order_rule:\n",
            "  - rule:\n",
            "      - [\"include_word_bpos\", \"SEM_HEAD\"]\n",
            "    res: root\n",
        ));
        let rows = interpret(&doc, Path::new("dep.yaml")).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0][0].as_str(),
            "<ul><li>対象の単語 の 文節タイプ が 「SEM_HEAD」 のいずれかだ</li></ul>"
        );
        assert_eq!(rows[0][1].as_str(), "root");
    }

    #[test]
    fn groups_keep_file_order() {
        let doc = doc(concat!(
            "order_rule:\n",
            "  - rule: [[\"include_word_bpos\", \"ROOT\"]]\n",
            "    res: root\n",
            "  - rule: [[\"include_word_upos\", \"ADP\"]]\n",
            "    res: case\n",
            "  - rule: [[\"include_word_upos\", \"ADP\"]]\n",
            "    res: fixed\n",
        ));
        let rows = interpret(&doc, Path::new("dep.yaml")).unwrap();
        let labels: Vec<&str> = rows.iter().map(|r| r[1].as_str()).collect();
        // Duplicate conditions stay: order is priority, not identity.
        assert_eq!(labels, ["root", "case", "fixed"]);
    }

    #[test]
    fn alternative_set_joins_with_commas_only() {
        let doc = doc(concat!(
            "order_rule:\n",
            "  - rule:\n",
            "      - [\"include_child_case\", [\"が\", \"を\", \"に\"]]\n",
            "    res: obl\n",
        ));
        let rows = interpret(&doc, Path::new("dep.yaml")).unwrap();
        let cell = rows[0][0].as_str();
        assert!(cell.contains("「が,を,に」"));
        // n elements, exactly n-1 separators, no conjunction.
        let value = cell.split('「').nth(1).unwrap().split('」').next().unwrap();
        assert_eq!(value.matches(',').count(), 2);
    }

    #[test]
    fn anded_conditions_become_separate_list_items() {
        let doc = doc(concat!(
            "order_rule:\n",
            "  - rule:\n",
            "      - [\"match_word_depnum\", 0]\n",
            "      - [\"include_word_upos\", [\"VERB\", \"ADJ\"]]\n",
            "    res: acl\n",
        ));
        let rows = interpret(&doc, Path::new("dep.yaml")).unwrap();
        assert_eq!(rows[0][0].as_str().matches("<li>").count(), 2);
        assert!(rows[0][0]
            .as_str()
            .contains("対象の単語 の 係り先の番号 が 「0」 と一致する"));
    }

    #[test]
    fn condition_text_is_escaped_inside_the_list() {
        let doc = doc(concat!(
            "order_rule:\n",
            "  - rule:\n",
            "      - [\"regex_word_lemma\", \"<&>\"]\n",
            "    res: dep\n",
        ));
        let rows = interpret(&doc, Path::new("dep.yaml")).unwrap();
        assert!(rows[0][0].as_str().contains("「&lt;&amp;&gt;」"));
    }

    #[test]
    fn unknown_operator_fails_naming_key_and_group() {
        let doc = doc(concat!(
            "order_rule:\n",
            "  - rule: [[\"include_word_bpos\", \"ROOT\"]]\n",
            "    res: root\n",
            "  - rule: [[\"xor_word_bpos\", \"FUNC\"]]\n",
            "    res: mark\n",
        ));
        let err = interpret(&doc, Path::new("dep.yaml")).unwrap_err();
        match &err {
            Error::RuleFormat { index, source, .. } => {
                assert_eq!(*index, 1);
                assert_eq!(*source, VocabError::UnknownOperator("xor".to_string()));
            }
            other => panic!("expected RuleFormat error, got {other:?}"),
        }
        assert!(err.to_string().contains("xor"));
    }

    #[test]
    fn interpretation_is_deterministic() {
        let yaml = concat!(
            "order_rule:\n",
            "  - rule: [[\"include_semhead_xpos\", [\"名詞-普通名詞\", \"代名詞\"]]]\n",
            "    res: nsubj\n",
        );
        let first = interpret(&doc(yaml), Path::new("dep.yaml")).unwrap();
        let second = interpret(&doc(yaml), Path::new("dep.yaml")).unwrap();
        assert_eq!(first, second);
    }
}
