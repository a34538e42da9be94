// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast rule - WCAG 1.4.3 Contrast (Minimum) (Level AA)
//!
//! Computed styles are out of reach for a lexical scanner, so this rule
//! only recognises the light gray text utilities that rarely reach 4.5:1
//! on a white background.

use crate::issue::wcag::CONTRAST_MINIMUM;
use crate::issue::{Issue, Severity};
use crate::rules::{numbered_lines, Rule};

const LIGHT_GRAY_CLASSES: &[&str] = &["text-gray-400", "text-gray-300"];

/// Flags light gray text utility classes
pub struct ColorContrastRule;

impl Rule for ColorContrastRule {
    fn id(&self) -> &'static str {
        "color-contrast"
    }

    fn name(&self) -> &'static str {
        "Color Contrast"
    }

    fn description(&self) -> &'static str {
        "Checks for light gray text classes with likely insufficient contrast (WCAG 1.4.3)"
    }

    fn check(&self, text: &str) -> Vec<Issue> {
        numbered_lines(text)
            .filter(|(_, line)| LIGHT_GRAY_CLASSES.iter().any(|class| line.contains(class)))
            .map(|(line_num, line)| {
                Issue::new(
                    "Potential Low Contrast",
                    Severity::Major,
                    "Light gray text may have insufficient contrast",
                )
                .at_line(line_num)
                .with_snippet(line)
                .with_recommendation(
                    "Ensure text has a contrast ratio of at least 4.5:1 for normal text",
                )
                .with_fix_example("Use text-gray-600 or darker for better contrast")
                .with_wcag(&CONTRAST_MINIMUM)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_gray_flagged_once_per_line() {
        let html = r#"<p className="text-gray-400 md:text-gray-300">Muted</p>"#;
        let issues = ColorContrastRule.check(html);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Major);
        assert_eq!(issues[0].wcag_criteria, "1.4.3 Contrast (Minimum) (Level AA)");
    }

    #[test]
    fn test_darker_gray_passes() {
        assert!(ColorContrastRule.check(r#"<p class="text-gray-600">ok</p>"#).is_empty());
    }
}
