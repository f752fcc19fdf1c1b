//! # Corpus Cleaning
//!
//! Ordered find-and-replace passes over corpus text. Rules are applied
//! left-to-right, each rule's output feeding the next; order matters because
//! later rules assume earlier artifacts are gone.

pub mod profiles;

use regex::Regex;

use crate::errors::{CMResult, CorpusmillError};

/// One find-and-replace cleaning rule.
#[derive(Debug, Clone)]
pub struct CleanRule {
    pattern: Regex,
    replacement: String,
}

impl CleanRule {
    /// Compile a cleaning rule from a regex pattern and a replacement.
    pub fn new(
        pattern: &str,
        replacement: &str,
    ) -> CMResult<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| CorpusmillError::External(format!("bad cleaning pattern: {e}")))?;
        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// The source pattern text.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The replacement text.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply this rule to `text`, replacing every match.
    pub fn apply(
        &self,
        text: &str,
    ) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// An ordered list of [`CleanRule`]s plus a terminal whitespace trim.
///
/// Cleaning is a pure function of the input text and the rule list;
/// for the terminal boilerplate and blank-run rules it is also idempotent:
/// re-cleaning already-cleaned text yields identical output.
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    rules: Vec<CleanRule>,
}

impl Cleaner {
    /// Build a cleaner from `(pattern, replacement)` pairs, in order.
    pub fn from_rules(rules: &[(&str, &str)]) -> CMResult<Self> {
        let rules = rules
            .iter()
            .map(|(pattern, replacement)| CleanRule::new(pattern, replacement))
            .collect::<CMResult<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// The rule list, in application order.
    pub fn rules(&self) -> &[CleanRule] {
        &self.rules
    }

    /// Apply every rule in order, then trim leading/trailing whitespace.
    pub fn clean(
        &self,
        text: &str,
    ) -> String {
        let mut text = text.to_string();
        for rule in &self.rules {
            text = rule.apply(&text);
        }
        text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_apply_in_order() {
        // The second rule only matches once the first has rewritten the text.
        let cleaner = Cleaner::from_rules(&[("a", "b"), ("bb", "c")]).unwrap();
        assert_eq!(cleaner.clean("ab"), "c");
    }

    #[test]
    fn test_clean_trims_result() {
        let cleaner = Cleaner::from_rules(&[]).unwrap();
        assert_eq!(cleaner.clean("  body text \n"), "body text");
    }

    #[test]
    fn test_bad_pattern_is_an_error() {
        assert!(Cleaner::from_rules(&[("(", "")]).is_err());
    }

    #[test]
    fn test_rule_accessors() {
        let rule = CleanRule::new("x+", "y").unwrap();
        assert_eq!(rule.pattern(), "x+");
        assert_eq!(rule.replacement(), "y");
        assert_eq!(rule.apply("axxa"), "aya");
    }
}
