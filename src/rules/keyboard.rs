// SPDX-License-Identifier: PMPL-1.0-or-later
//! Keyboard rules - WCAG 2.1.2 No Keyboard Trap (Level A), 2.4.3 Focus Order (Level A)
//!
//! Two independent rules live here:
//! - `keyboard-traps`: click handlers on elements removed from the tab order
//! - `tab-index`: positive tabindex values that override document order

use crate::issue::wcag::{FOCUS_ORDER, NO_KEYBOARD_TRAP};
use crate::issue::{Issue, Severity};
use crate::rules::{numbered_lines, Rule};
use regex::Regex;
use std::sync::LazyLock;

static TABINDEX_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)tabindex=["']?(\d+)["']?"#).expect("valid regex"));

/// Flags clickable elements that cannot receive keyboard focus
pub struct KeyboardTrapRule;

impl Rule for KeyboardTrapRule {
    fn id(&self) -> &'static str {
        "keyboard-traps"
    }

    fn name(&self) -> &'static str {
        "Keyboard Traps"
    }

    fn description(&self) -> &'static str {
        "Checks for click handlers on elements with tabindex=\"-1\" (WCAG 2.1.2)"
    }

    fn check(&self, text: &str) -> Vec<Issue> {
        numbered_lines(text)
            .filter(|(_, line)| {
                line.contains(r#"tabindex="-1""#)
                    && (line.contains("onclick") || line.contains("onClick"))
            })
            .map(|(line_num, line)| {
                Issue::new(
                    "Potential Keyboard Trap",
                    Severity::Critical,
                    "Interactive element with tabindex=\"-1\" may not be keyboard accessible",
                )
                .at_line(line_num)
                .with_snippet(line)
                .with_recommendation(
                    "Remove tabindex=\"-1\" or ensure keyboard access through other means",
                )
                .with_fix_example("<button onClick={handleClick}>Accessible button</button>")
                .with_wcag(&NO_KEYBOARD_TRAP)
            })
            .collect()
    }
}

/// Flags positive tabindex values
pub struct TabIndexRule;

impl Rule for TabIndexRule {
    fn id(&self) -> &'static str {
        "tab-index"
    }

    fn name(&self) -> &'static str {
        "Tab Index Issues"
    }

    fn description(&self) -> &'static str {
        "Checks for tabindex values greater than zero (WCAG 2.4.3)"
    }

    fn check(&self, text: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (line_num, line) in numbered_lines(text) {
            let Some(value) = positive_tabindex(line) else {
                continue;
            };
            issues.push(
                Issue::new(
                    "Positive Tab Index",
                    Severity::Major,
                    &format!("Positive tabindex ({}) disrupts natural tab order", value),
                )
                .at_line(line_num)
                .with_snippet(line)
                .with_recommendation("Use tabindex=\"0\" or remove tabindex and rely on DOM order")
                .with_fix_example("<button tabindex=\"0\">Properly ordered button</button>")
                .with_wcag(&FOCUS_ORDER),
            );
        }

        issues
    }
}

/// Digits of the first tabindex on the line, if that value is above zero.
///
/// Compared as a digit string so arbitrarily long values cannot overflow.
fn positive_tabindex(line: &str) -> Option<&str> {
    let caps = TABINDEX_VALUE.captures(line)?;
    let digits = caps.get(1)?.as_str();
    digits.bytes().any(|b| b != b'0').then_some(digits)
}
