use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::error::{Error, Result};

/// Built-in license file conventions, highest precedence first.
///
/// Patterns are tested against the upper-cased base name, so only upper-case
/// literals are needed. Word characters are spelled out as an ASCII class;
/// `\w` would also accept Unicode letters.
const BUILTIN_RULES: &[(&str, &str)] = &[
    ("LICENSE", "LICENSE"),
    ("LICENSE-*", "LICENSE[-_][0-9A-Za-z_]+"), // e.g. LICENSE-MIT
    ("MIT-LICENSE", "MIT-LICENSE"),
    ("LICENCE", "LICENCE"),
    ("LICENCE-*", "LICENCE[-_][0-9A-Za-z_]+"), // e.g. LICENCE-BSD
    ("COPYING", "COPYING"),
    ("README", "README"),
];

static BUILTIN: LazyLock<Precedence> = LazyLock::new(|| {
    let rules = BUILTIN_RULES
        .iter()
        .map(|(label, pattern)| Rule::new(*label, pattern).expect("valid built-in pattern"))
        .collect();
    Precedence::new(rules)
});

/// One accepted license file naming convention.
#[derive(Debug, Clone)]
pub struct Rule {
    label: String,
    pattern: Regex,
}

impl Rule {
    /// Compile a rule. The pattern is anchored at both ends and is matched
    /// against an upper-cased base name (see [`base_name`](super::matcher::base_name)).
    pub fn new(label: impl Into<String>, pattern: &str) -> Result<Self> {
        let label = label.into();
        let pattern = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            Error::InvalidPattern {
                label: label.clone(),
                source,
            }
        })?;

        Ok(Self { label, pattern })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_match(&self, base_name: &str) -> bool {
        self.pattern.is_match(base_name)
    }
}

/// Ordered rule table. A rule's position is its rank and decides where its
/// match lands in the result.
#[derive(Debug, Clone)]
pub struct Precedence {
    rules: Vec<Rule>,
}

impl Precedence {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in table: `LICENSE`, `LICENSE-*`, `MIT-LICENSE`, `LICENCE`,
    /// `LICENCE-*`, `COPYING`, `README`.
    pub fn builtin() -> &'static Precedence {
        &BUILTIN
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Copy of this table without the rules whose label is listed.
    /// Labels are compared case-insensitively; unknown labels are logged and
    /// otherwise ignored.
    pub fn without<S: AsRef<str>>(&self, labels: &[S]) -> Self {
        for label in labels {
            let label = label.as_ref();
            if !self
                .rules
                .iter()
                .any(|rule| rule.label().eq_ignore_ascii_case(label))
            {
                warn!("cannot exclude unknown rule `{}`", label);
            }
        }

        let rules = self
            .rules
            .iter()
            .filter(|rule| {
                !labels
                    .iter()
                    .any(|label| label.as_ref().eq_ignore_ascii_case(rule.label()))
            })
            .cloned()
            .collect();
        Self { rules }
    }

    /// Copy of this table with `extra` appended at the lowest precedence.
    pub fn extended(&self, extra: impl IntoIterator<Item = Rule>) -> Self {
        let mut rules = self.rules.clone();
        rules.extend(extra);
        Self { rules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(precedence: &Precedence) -> Vec<&str> {
        precedence.rules().iter().map(Rule::label).collect()
    }

    #[test]
    fn test_builtin_order() {
        assert_eq!(
            labels(Precedence::builtin()),
            vec![
                "LICENSE",
                "LICENSE-*",
                "MIT-LICENSE",
                "LICENCE",
                "LICENCE-*",
                "COPYING",
                "README"
            ]
        );
    }

    #[test]
    fn test_rule_is_anchored() {
        let rule = Rule::new("COPYING", "COPYING").unwrap();
        assert!(rule.is_match("COPYING"));
        assert!(!rule.is_match("COPYING2"));
        assert!(!rule.is_match("XCOPYING"));
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let rule = Rule::new("UNLICENSE", "UNLICENSE|UNLICENCE").unwrap();
        assert!(rule.is_match("UNLICENCE"));
        assert!(!rule.is_match("UNLICENSED"));
    }

    #[test]
    fn test_variant_rule_requires_word_suffix() {
        let rule = &Precedence::builtin().rules()[1];
        assert!(rule.is_match("LICENSE-MIT"));
        assert!(rule.is_match("LICENSE_APACHE_2"));
        assert!(!rule.is_match("LICENSE-"));
        assert!(!rule.is_match("LICENSE-MIT-2"));
        assert!(!rule.is_match("LICENSE-É"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Rule::new("broken", "LICENSE(").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref label, .. } if label == "broken"));
    }

    #[test]
    fn test_without_ignores_case() {
        let table = Precedence::builtin().without(&["readme", "COPYING"]);
        assert_eq!(table.len(), 5);
        assert!(!labels(&table).contains(&"README"));
        assert!(!labels(&table).contains(&"COPYING"));
    }

    #[test]
    fn test_without_unknown_label() {
        let table = Precedence::builtin().without(&["READ ME"]);
        assert_eq!(labels(&table), labels(Precedence::builtin()));
    }

    #[test]
    fn test_extended_appends_last() {
        let table = Precedence::builtin().extended([Rule::new("UNLICENSE", "UNLICENSE").unwrap()]);
        assert_eq!(table.len(), 8);
        assert_eq!(labels(&table).last(), Some(&"UNLICENSE"));
    }
}
