// SPDX-License-Identifier: PMPL-1.0-or-later
//! Landmark regions rule - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Document-level: looks at the whole text, not individual lines. Each
//! landmark check fires at most once per scan and reports line 1.

use crate::issue::wcag::INFO_AND_RELATIONSHIPS;
use crate::issue::{Issue, Severity};
use crate::rules::{Rule, RuleScope};

const DOCUMENT_SNIPPET: &str = "Document structure";

/// Flags documents without main or navigation landmarks
pub struct LandmarkRule;

impl Rule for LandmarkRule {
    fn id(&self) -> &'static str {
        "landmarks"
    }

    fn name(&self) -> &'static str {
        "Landmark Regions"
    }

    fn description(&self) -> &'static str {
        "Checks the document for main and navigation landmarks (WCAG 1.3.1)"
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Document
    }

    fn check(&self, text: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        if !text.contains("<main") && !text.contains(r#"role="main""#) {
            issues.push(
                Issue::new(
                    "Missing Main Landmark",
                    Severity::Major,
                    "Page is missing a main landmark region",
                )
                .with_snippet(DOCUMENT_SNIPPET)
                .with_recommendation("Add a <main> element to wrap the primary content")
                .with_fix_example("<main>\n  {/* Main content here */}\n</main>")
                .with_wcag(&INFO_AND_RELATIONSHIPS),
            );
        }

        if !text.contains("<nav") && !text.contains(r#"role="navigation""#) {
            issues.push(
                Issue::new(
                    "Missing Navigation Landmark",
                    Severity::Minor,
                    "Consider adding navigation landmarks for better screen reader navigation",
                )
                .with_snippet(DOCUMENT_SNIPPET)
                .with_recommendation("Wrap navigation links in a <nav> element")
                .with_fix_example(
                    "<nav aria-label=\"Main navigation\">\n  {/* Navigation links */}\n</nav>",
                )
                .with_wcag(&INFO_AND_RELATIONSHIPS),
            );
        }

        issues
    }
}
