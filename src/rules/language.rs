// SPDX-License-Identifier: PMPL-1.0-or-later
//! Language attribute rule - WCAG 3.1.1 Language of Page (Level A)
//!
//! Document-level. Silent unless the text contains an `<html` tag, so
//! fragments and components are never flagged.

use crate::issue::wcag::LANGUAGE_OF_PAGE;
use crate::issue::{Issue, Severity};
use crate::rules::{Rule, RuleScope};

/// Flags documents whose `<html>` element has no `lang`
pub struct LangAttributeRule;

impl Rule for LangAttributeRule {
    fn id(&self) -> &'static str {
        "lang-attribute"
    }

    fn name(&self) -> &'static str {
        "Language Attribute"
    }

    fn description(&self) -> &'static str {
        "Checks that a full HTML document declares its language (WCAG 3.1.1)"
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Document
    }

    fn check(&self, text: &str) -> Vec<Issue> {
        if !text.contains("<html") || text.contains("lang=") {
            return Vec::new();
        }

        vec![Issue::new(
            "Missing Language Attribute",
            Severity::Major,
            "HTML element is missing the lang attribute",
        )
        .with_snippet("<html>")
        .with_recommendation("Add a lang attribute to the html element")
        .with_fix_example("<html lang=\"en\">")
        .with_wcag(&LANGUAGE_OF_PAGE)]
    }
}
