// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text rule - WCAG 1.1.1 Non-text Content (Level A)
//!
//! Every `<img>` tag must carry a non-empty `alt` attribute. Each tag on a
//! line is checked separately, so one line can yield several issues.

use crate::issue::wcag::NON_TEXT_CONTENT;
use crate::issue::{Issue, Severity};
use crate::rules::{numbered_lines, Rule};
use regex::Regex;
use std::sync::LazyLock;

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img[^>]*>").expect("valid regex"));

/// Flags images without usable alt text
pub struct AltTextRule;

impl Rule for AltTextRule {
    fn id(&self) -> &'static str {
        "alt-text"
    }

    fn name(&self) -> &'static str {
        "Alt Text Issues"
    }

    fn description(&self) -> &'static str {
        "Checks <img> tags for a missing or empty alt attribute (WCAG 1.1.1)"
    }

    fn check(&self, text: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (line_num, line) in numbered_lines(text) {
            for tag in IMG_TAG.find_iter(line).map(|m| m.as_str()) {
                if !lacks_alt(tag) {
                    continue;
                }
                issues.push(
                    Issue::new(
                        "Missing Alt Text",
                        Severity::Critical,
                        "Image is missing alt attribute or has empty alt text",
                    )
                    .at_line(line_num)
                    .with_snippet(tag)
                    .with_recommendation(
                        "Add descriptive alt text that conveys the purpose of the image",
                    )
                    .with_fix_example(&with_alt_placeholder(tag))
                    .with_wcag(&NON_TEXT_CONTENT),
                );
            }
        }

        issues
    }
}

fn lacks_alt(tag: &str) -> bool {
    !tag.contains("alt=") || tag.contains(r#"alt="""#) || tag.contains("alt=''")
}

/// Insert a placeholder alt attribute right after `<img`
fn with_alt_placeholder(tag: &str) -> String {
    // The regex guarantees an ASCII `<img` prefix in any letter case.
    format!(r#"<img alt="Descriptive text here"{}"#, &tag[4..])
}
