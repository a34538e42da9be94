// SPDX-License-Identifier: PMPL-1.0-or-later
//! Built-in accessibility rules.
//!
//! Each rule is a stateless detector mapping source text to issues. Most
//! rules look at one line at a time; `landmarks` and `lang-attribute`
//! inspect the whole document instead (see [`RuleScope`]).
//!
//! The catalog is a static slice in registration order. Scan output
//! follows that order, so new rules go at the end.

pub mod alt_text;
pub mod aria;
pub mod buttons;
pub mod contrast;
pub mod forms;
pub mod headings;
pub mod keyboard;
pub mod landmarks;
pub mod language;
pub mod motion;

use crate::issue::Issue;
use serde::Serialize;

/// What part of the input a rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleScope {
    /// Each line on its own; issues carry that line's number
    Line,
    /// The whole text; issues are reported on line 1
    Document,
}

/// Trait implemented by all rules
pub trait Rule: Send + Sync {
    /// Stable identifier used for selection, e.g. `alt-text`
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Short description of what this rule checks
    fn description(&self) -> &'static str;

    /// Whether this rule works per line or on the whole document
    fn scope(&self) -> RuleScope {
        RuleScope::Line
    }

    /// Inspect `text` and return issues in discovery order
    fn check(&self, text: &str) -> Vec<Issue>;
}

/// Every registered rule, in registration order
pub static RULES: &[&dyn Rule] = &[
    &alt_text::AltTextRule,
    &aria::AriaRoleRule,
    &headings::HeadingStructureRule,
    &forms::FormLabelRule,
    &keyboard::KeyboardTrapRule,
    &contrast::ColorContrastRule,
    &landmarks::LandmarkRule,
    &buttons::EmptyButtonRule,
    &language::LangAttributeRule,
    &motion::MotionRule,
    &keyboard::TabIndexRule,
];

/// Rule metadata exposed to callers that only need to pick rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub id: &'static str,
    pub name: &'static str,
}

/// List `{id, name}` for every registered rule, in registration order
pub fn list_rules() -> Vec<RuleInfo> {
    RULES
        .iter()
        .map(|rule| RuleInfo { id: rule.id(), name: rule.name() })
        .collect()
}

/// Look up a rule by id
pub fn find_rule(id: &str) -> Option<&'static dyn Rule> {
    RULES.iter().copied().find(|rule| rule.id() == id)
}

/// Split text into `(line_number, line)` pairs on `\n` only.
///
/// Carriage returns stay part of the line. Empty text yields one empty line.
pub(crate) fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n').enumerate().map(|(idx, line)| (idx + 1, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = list_rules().into_iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                "alt-text",
                "aria-roles",
                "heading-structure",
                "form-labels",
                "keyboard-traps",
                "color-contrast",
                "landmarks",
                "empty-buttons",
                "lang-attribute",
                "motion-warnings",
                "tab-index",
            ]
        );
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<_> = RULES.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), RULES.len());
    }

    #[test]
    fn test_find_rule() {
        assert_eq!(find_rule("tab-index").map(|r| r.name()), Some("Tab Index Issues"));
        assert!(find_rule("nope").is_none());
    }

    #[test]
    fn test_document_scoped_rules() {
        let document: Vec<_> = RULES
            .iter()
            .filter(|r| r.scope() == RuleScope::Document)
            .map(|r| r.id())
            .collect();
        assert_eq!(document, vec!["landmarks", "lang-attribute"]);
    }

    #[test]
    fn test_numbered_lines_keeps_carriage_returns() {
        let lines: Vec<_> = numbered_lines("a\r\nb\n").collect();
        assert_eq!(lines, vec![(1, "a\r"), (2, "b"), (3, "")]);
    }
}
