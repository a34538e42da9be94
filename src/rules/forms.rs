// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form label rule - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Every `<input>` needs an accessible name. This lexical check only sees
//! the tag itself: an `aria-label`/`aria-labelledby` attribute satisfies it,
//! an `id` alone does not, because a matching `<label for>` elsewhere in
//! the document is not resolved. Hidden and submit inputs are exempt.

use crate::issue::wcag::INFO_AND_RELATIONSHIPS;
use crate::issue::{Issue, Severity};
use crate::rules::{numbered_lines, Rule};
use regex::Regex;
use std::sync::LazyLock;

static INPUT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<input[^>]*>").expect("valid regex"));

const LABEL_FIX_EXAMPLE: &str =
    "<label for=\"inputId\">Label text</label>\n<input id=\"inputId\" type=\"text\" />";

/// Flags inputs without an accessible label
pub struct FormLabelRule;

impl Rule for FormLabelRule {
    fn id(&self) -> &'static str {
        "form-labels"
    }

    fn name(&self) -> &'static str {
        "Form Labels"
    }

    fn description(&self) -> &'static str {
        "Checks <input> tags for an aria-label or aria-labelledby (WCAG 1.3.1)"
    }

    fn check(&self, text: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (line_num, line) in numbered_lines(text) {
            for tag in INPUT_TAG.find_iter(line).map(|m| m.as_str()) {
                if has_aria_name(tag) || is_exempt(tag) {
                    continue;
                }
                issues.push(
                    Issue::new(
                        "Missing Form Label",
                        Severity::Critical,
                        "Form input is missing an associated label",
                    )
                    .at_line(line_num)
                    .with_snippet(tag)
                    .with_recommendation(
                        "Add a <label> element with a \"for\" attribute matching the input's id, or use aria-label",
                    )
                    .with_fix_example(LABEL_FIX_EXAMPLE)
                    .with_wcag(&INFO_AND_RELATIONSHIPS),
                );
            }
        }

        issues
    }
}

fn has_aria_name(tag: &str) -> bool {
    tag.contains("aria-label=") || tag.contains("aria-labelledby=")
}

fn is_exempt(tag: &str) -> bool {
    tag.contains(r#"type="hidden""#) || tag.contains(r#"type="submit""#)
}
