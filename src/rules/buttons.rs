// SPDX-License-Identifier: PMPL-1.0-or-later
//! Empty button rule - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! Only buttons opened and closed on the same line are inspected;
//! multi-line button bodies are not analyzed.

use crate::issue::wcag::NAME_ROLE_VALUE;
use crate::issue::{Issue, Severity};
use crate::rules::{numbered_lines, Rule};
use regex::Regex;
use std::sync::LazyLock;

static BUTTON_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<button[^>]*>(.*?)</button>").expect("valid regex"));

/// Flags buttons with no text content
pub struct EmptyButtonRule;

impl Rule for EmptyButtonRule {
    fn id(&self) -> &'static str {
        "empty-buttons"
    }

    fn name(&self) -> &'static str {
        "Empty Buttons"
    }

    fn description(&self) -> &'static str {
        "Checks for <button> elements without content (WCAG 4.1.2)"
    }

    fn check(&self, text: &str) -> Vec<Issue> {
        numbered_lines(text)
            .filter(|(_, line)| has_empty_button(line))
            .map(|(line_num, line)| {
                Issue::new("Empty Button", Severity::Critical, "Button has no accessible name")
                    .at_line(line_num)
                    .with_snippet(line)
                    .with_recommendation("Add text content or aria-label to the button")
                    .with_fix_example("<button aria-label=\"Close dialog\">×</button>")
                    .with_wcag(&NAME_ROLE_VALUE)
            })
            .collect()
    }
}

/// First same-line button pair on the line has a blank body
fn has_empty_button(line: &str) -> bool {
    if !line.contains("<button") || !line.contains("</button>") {
        return false;
    }
    BUTTON_BODY
        .captures(line)
        .is_some_and(|caps| caps[1].trim().is_empty())
}
