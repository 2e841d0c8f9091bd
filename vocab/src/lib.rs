//! Closed rule vocabulary of the UD-Japanese conversion tables, encoded as
//! typed Rust data.
//!
//! The conversion pipeline's rule files reference a small fixed symbol set:
//! three comparison operators, six word-scope selectors, twelve grammatical
//! features, and five POS-rule field names. This crate carries that whole
//! vocabulary as enums with `&'static str` phrase data, so an unrecognized
//! symbol is impossible past the single parse boundary where raw rule-file
//! text enters the closed set.
//!
//! # Entry Point
//!
//! ```
//! use udrule_vocab::FunctionKey;
//!
//! let key: FunctionKey = "include_word_bpos".parse().unwrap();
//! let sentence = key.sentence("SEM_HEAD");
//! assert_eq!(sentence, "対象の単語 の 文節タイプ が 「SEM_HEAD」 のいずれかだ");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::str::FromStr;

use thiserror::Error;

/// A rule-file symbol that falls outside the closed vocabulary.
///
/// The offending text is carried verbatim so diagnostics can name it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    /// The operator component of a function key is not recognized.
    #[error("unknown operator \"{0}\"")]
    UnknownOperator(String),
    /// The scope component of a function key is not recognized.
    #[error("unknown scope \"{0}\"")]
    UnknownScope(String),
    /// The feature component of a function key is not recognized.
    #[error("unknown feature \"{0}\"")]
    UnknownFeature(String),
    /// A POS-rule field name is not recognized.
    #[error("unknown rule field \"{0}\"")]
    UnknownField(String),
    /// A function key does not split into operator, scope, and feature.
    #[error("function key \"{0}\" is not of the form operator_scope_feature")]
    MalformedKey(String),
}

/// Comparison operator of a condition tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Membership test against an alternative set.
    Include,
    /// Regular-expression match.
    Regex,
    /// Exact match.
    Match,
}

impl Operator {
    /// Returns the rule-file key for this operator.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Operator::Include => "include",
            Operator::Regex => "regex",
            Operator::Match => "match",
        }
    }

    /// Parses a rule-file operator key.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::UnknownOperator`] naming the key when it is not
    /// one of `include`, `regex`, `match`.
    pub fn parse(key: &str) -> Result<Self, VocabError> {
        match key {
            "include" => Ok(Operator::Include),
            "regex" => Ok(Operator::Regex),
            "match" => Ok(Operator::Match),
            other => Err(VocabError::UnknownOperator(other.to_string())),
        }
    }

    /// Formats the operator's sentence template with a scope phrase, a
    /// feature phrase, and an already-rendered comparison value.
    #[must_use]
    pub fn sentence(self, scope: Scope, feature: Feature, value: &str) -> String {
        match self {
            Operator::Include => format!(
                "{} {} が 「{}」 のいずれかだ",
                scope.phrase(),
                feature.phrase(),
                value
            ),
            // regex and match read the same in prose; they differ only in
            // how the conversion pipeline evaluates them.
            Operator::Regex | Operator::Match => format!(
                "{} {} が 「{}」 と一致する",
                scope.phrase(),
                feature.phrase(),
                value
            ),
        }
    }
}

/// Which word, relative to the target word, a condition examines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The target word itself.
    Word,
    /// The target word's parent.
    Parent,
    /// The content-word head (SEM_HEAD) of the phrase containing the target.
    Semhead,
    /// The function-word head (SYN_HEAD) of the phrase containing the target.
    Synhead,
    /// Any child of the target word.
    Child,
    /// Any child of the target word's parent.
    Parentchild,
}

impl Scope {
    /// Returns the rule-file key for this scope.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Scope::Word => "word",
            Scope::Parent => "parent",
            Scope::Semhead => "semhead",
            Scope::Synhead => "synhead",
            Scope::Child => "child",
            Scope::Parentchild => "parentchild",
        }
    }

    /// Parses a rule-file scope key.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::UnknownScope`] naming the key when it is not a
    /// recognized scope selector.
    pub fn parse(key: &str) -> Result<Self, VocabError> {
        match key {
            "word" => Ok(Scope::Word),
            "parent" => Ok(Scope::Parent),
            "semhead" => Ok(Scope::Semhead),
            "synhead" => Ok(Scope::Synhead),
            "child" => Ok(Scope::Child),
            "parentchild" => Ok(Scope::Parentchild),
            other => Err(VocabError::UnknownScope(other.to_string())),
        }
    }

    /// Returns the Japanese noun phrase naming the examined word.
    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            Scope::Word => "対象の単語",
            Scope::Parent => "対象の単語の親",
            Scope::Semhead => "対象の単語を含んでいる文節の主辞の単語",
            Scope::Synhead => "対象の単語を含んでいる文節の機能語の単語",
            Scope::Child => "対象の単語の子である単語",
            Scope::Parentchild => "対象の単語の親の子である単語",
        }
    }
}

/// The grammatical attribute a condition reads off the selected word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Phrase-position type (SEM_HEAD, SYN_HEAD, FUNC, CONT, ...).
    Bpos,
    /// UniDic short-unit part-of-speech tag.
    Xpos,
    /// Lemma.
    Lemma,
    /// Universal Dependencies part-of-speech tag.
    Upos,
    /// Dependency-target index.
    Depnum,
    /// Extended-Cabocha segment label (e.g. "Disfluency").
    Segment,
    /// Sentence-final surface string of the phrase.
    Suffixstring,
    /// Attached case/binding/adverbial particle.
    Case,
    /// Grammatical category of the phrase (体言, 用言, コピュラ).
    Bunsetutype,
    /// Inter-word distance formula `X-Y(==|>|<|>=|<=)`.
    Disformula,
    /// Predicate-argument link.
    Paslink,
    /// UniDic long-unit part-of-speech tag.
    Luwpos,
}

impl Feature {
    /// Returns the rule-file key for this feature.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Feature::Bpos => "bpos",
            Feature::Xpos => "xpos",
            Feature::Lemma => "lemma",
            Feature::Upos => "upos",
            Feature::Depnum => "depnum",
            Feature::Segment => "segment",
            Feature::Suffixstring => "suffixstring",
            Feature::Case => "case",
            Feature::Bunsetutype => "bunsetutype",
            Feature::Disformula => "disformula",
            Feature::Paslink => "paslink",
            Feature::Luwpos => "luwpos",
        }
    }

    /// Parses a rule-file feature key.
    ///
    /// Accepts the historical `busetutype` spelling found in existing rule
    /// files as an alias of `bunsetutype`.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::UnknownFeature`] naming the key when it is not
    /// a recognized feature.
    pub fn parse(key: &str) -> Result<Self, VocabError> {
        match key {
            "bpos" => Ok(Feature::Bpos),
            "xpos" => Ok(Feature::Xpos),
            "lemma" => Ok(Feature::Lemma),
            "upos" => Ok(Feature::Upos),
            "depnum" => Ok(Feature::Depnum),
            "segment" => Ok(Feature::Segment),
            "suffixstring" => Ok(Feature::Suffixstring),
            "case" => Ok(Feature::Case),
            "bunsetutype" | "busetutype" => Ok(Feature::Bunsetutype),
            "disformula" => Ok(Feature::Disformula),
            "paslink" => Ok(Feature::Paslink),
            "luwpos" => Ok(Feature::Luwpos),
            other => Err(VocabError::UnknownFeature(other.to_string())),
        }
    }

    /// Returns the Japanese phrase naming the attribute, particle included.
    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            Feature::Bpos => "の 文節タイプ",
            Feature::Xpos => "の Unidic短単位品詞",
            Feature::Lemma => "の レンマ",
            Feature::Upos => "の UD品詞",
            Feature::Depnum => "の 係り先の番号",
            Feature::Segment => "の セグメント",
            Feature::Suffixstring => "の 文末表現",
            Feature::Case => "に 付属する助詞",
            Feature::Bunsetutype => "の 文法種類",
            Feature::Disformula => "との 距離",
            Feature::Paslink => "の 述語項",
            Feature::Luwpos => "の Unidic長単位品詞",
        }
    }
}

/// A decomposed dependency-rule function key, `operator_scope_feature`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionKey {
    /// Comparison operator.
    pub operator: Operator,
    /// Word-scope selector.
    pub scope: Scope,
    /// Examined grammatical feature.
    pub feature: Feature,
}

impl FunctionKey {
    /// Renders this key's condition as a Japanese sentence over the given
    /// comparison value.
    #[must_use]
    pub fn sentence(&self, value: &str) -> String {
        self.operator.sentence(self.scope, self.feature, value)
    }
}

impl FromStr for FunctionKey {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('_');
        let (Some(operator), Some(scope), Some(feature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(VocabError::MalformedKey(s.to_string()));
        };
        Ok(FunctionKey {
            operator: Operator::parse(operator)?,
            scope: Scope::parse(scope)?,
            feature: Feature::parse(feature)?,
        })
    }
}

/// A POS-rule field name with its display-column label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    /// UniDic short-unit part-of-speech tag.
    Pos,
    /// Base lexeme (原型).
    BaseLexeme,
    /// UniDic long-unit part-of-speech tag.
    Luw,
    /// Phrase-position type.
    Bpos,
    /// The parent word's Universal Dependencies part-of-speech tag.
    ParentUpos,
}

impl Field {
    /// The fixed display order of the POS-rule condition columns.
    pub const COLUMNS: [Field; 5] = [
        Field::Pos,
        Field::BaseLexeme,
        Field::Luw,
        Field::Bpos,
        Field::ParentUpos,
    ];

    /// Returns the rule-file key for this field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Field::Pos => "pos",
            Field::BaseLexeme => "base_lexeme",
            Field::Luw => "luw",
            Field::Bpos => "bpos",
            Field::ParentUpos => "parent_upos",
        }
    }

    /// Parses a rule-file field name.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::UnknownField`] naming the field when it is not
    /// a recognized POS-rule field.
    pub fn parse(key: &str) -> Result<Self, VocabError> {
        match key {
            "pos" => Ok(Field::Pos),
            "base_lexeme" => Ok(Field::BaseLexeme),
            "luw" => Ok(Field::Luw),
            "bpos" => Ok(Field::Bpos),
            "parent_upos" => Ok(Field::ParentUpos),
            other => Err(VocabError::UnknownField(other.to_string())),
        }
    }

    /// Returns the display-column label for this field.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Field::Pos => "短単位品詞",
            Field::BaseLexeme => "原型",
            Field::Luw => "長単位品詞",
            Field::Bpos => "文節タイプ",
            Field::ParentUpos => "単語の親のUPOS",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn function_key_decomposes() {
        let key: FunctionKey = "regex_parent_lemma".parse().unwrap();
        assert_eq!(key.operator, Operator::Regex);
        assert_eq!(key.scope, Scope::Parent);
        assert_eq!(key.feature, Feature::Lemma);
    }

    #[test]
    fn include_sentence_reads_as_membership() {
        let key: FunctionKey = "include_word_bpos".parse().unwrap();
        assert_eq!(
            key.sentence("SEM_HEAD"),
            "対象の単語 の 文節タイプ が 「SEM_HEAD」 のいずれかだ"
        );
    }

    #[test]
    fn match_and_regex_share_phrasing() {
        let m: FunctionKey = "match_semhead_xpos".parse().unwrap();
        let r: FunctionKey = "regex_semhead_xpos".parse().unwrap();
        assert_eq!(m.sentence("助詞-格助詞"), r.sentence("助詞-格助詞"));
        assert_eq!(
            m.sentence("助詞-格助詞"),
            "対象の単語を含んでいる文節の主辞の単語 の Unidic短単位品詞 が 「助詞-格助詞」 と一致する"
        );
    }

    #[test]
    fn sentence_rendering_is_deterministic() {
        let key: FunctionKey = "include_child_case".parse().unwrap();
        assert_eq!(key.sentence("が,を"), key.sentence("が,を"));
    }

    #[test]
    fn unknown_operator_names_the_key() {
        let err = "xor_word_bpos".parse::<FunctionKey>().unwrap_err();
        assert_eq!(err, VocabError::UnknownOperator("xor".to_string()));
        assert!(err.to_string().contains("xor"));
    }

    #[test]
    fn unknown_scope_and_feature_name_the_key() {
        assert_eq!(
            "include_cousin_bpos".parse::<FunctionKey>().unwrap_err(),
            VocabError::UnknownScope("cousin".to_string())
        );
        assert_eq!(
            "include_word_color".parse::<FunctionKey>().unwrap_err(),
            VocabError::UnknownFeature("color".to_string())
        );
    }

    #[test]
    fn malformed_key_is_rejected() {
        assert_eq!(
            "include_word".parse::<FunctionKey>().unwrap_err(),
            VocabError::MalformedKey("include_word".to_string())
        );
        assert_eq!(
            "a_b_c_d".parse::<FunctionKey>().unwrap_err(),
            VocabError::MalformedKey("a_b_c_d".to_string())
        );
    }

    #[test]
    fn legacy_bunsetutype_spelling_is_accepted() {
        assert_eq!(Feature::parse("busetutype").unwrap(), Feature::Bunsetutype);
        assert_eq!(Feature::parse("bunsetutype").unwrap(), Feature::Bunsetutype);
    }

    #[test]
    fn every_key_round_trips_through_parse() {
        for op in [Operator::Include, Operator::Regex, Operator::Match] {
            assert_eq!(Operator::parse(op.key()).unwrap(), op);
        }
        for scope in [
            Scope::Word,
            Scope::Parent,
            Scope::Semhead,
            Scope::Synhead,
            Scope::Child,
            Scope::Parentchild,
        ] {
            assert_eq!(Scope::parse(scope.key()).unwrap(), scope);
        }
        for field in Field::COLUMNS {
            assert_eq!(Field::parse(field.key()).unwrap(), field);
        }
    }

    #[test]
    fn pos_columns_keep_display_order() {
        let labels: Vec<&str> = Field::COLUMNS.iter().map(|f| f.column()).collect();
        assert_eq!(
            labels,
            ["短単位品詞", "原型", "長単位品詞", "文節タイプ", "単語の親のUPOS"]
        );
    }
}
