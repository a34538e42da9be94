// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading hierarchy rule - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Headings must not skip levels on the way down (h1 -> h3). Going back up
//! any number of levels is fine. Only the first heading tag on a line is
//! considered, and every heading updates the running level whether or not
//! it was flagged.

use crate::issue::wcag::INFO_AND_RELATIONSHIPS;
use crate::issue::{Issue, Severity};
use crate::rules::{numbered_lines, Rule};
use regex::Regex;
use std::sync::LazyLock;

static HEADING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h([1-6])[^>]*>").expect("valid regex"));

/// Flags skipped heading levels
pub struct HeadingStructureRule;

impl Rule for HeadingStructureRule {
    fn id(&self) -> &'static str {
        "heading-structure"
    }

    fn name(&self) -> &'static str {
        "Heading Structure"
    }

    fn description(&self) -> &'static str {
        "Checks that heading levels do not skip (WCAG 1.3.1)"
    }

    fn check(&self, text: &str) -> Vec<Issue> {
        let (_, issues) = numbered_lines(text).fold(
            (None::<u8>, Vec::new()),
            |(last_level, mut issues), (line_num, line)| {
                let Some(level) = heading_level(line) else {
                    return (last_level, issues);
                };
                if let Some(last) = last_level {
                    if level > last + 1 {
                        issues.push(skipped_level(line_num, line, last, level));
                    }
                }
                (Some(level), issues)
            },
        );
        issues
    }
}

/// Level of the first heading opening tag on the line
fn heading_level(line: &str) -> Option<u8> {
    HEADING_TAG
        .captures(line)
        .and_then(|caps| caps[1].parse::<u8>().ok())
}

fn skipped_level(line_num: usize, line: &str, last: u8, current: u8) -> Issue {
    let expected = last + 1;
    Issue::new(
        "Skipped Heading Level",
        Severity::Major,
        &format!("Heading level skipped from h{} to h{}", last, current),
    )
    .at_line(line_num)
    .with_snippet(line)
    .with_recommendation("Ensure heading levels follow a logical order without skipping levels")
    .with_fix_example(&format!("<h{0}>Your heading text</h{0}>", expected))
    .with_wcag(&INFO_AND_RELATIONSHIPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_h1_to_h3() {
        let issues = HeadingStructureRule.check("<h1>A</h1>\n<h3>B</h3>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line_number, 2);
        assert_eq!(issues[0].severity, Severity::Major);
        assert_eq!(issues[0].message, "Heading level skipped from h1 to h3");
        assert_eq!(issues[0].fix_example, "<h2>Your heading text</h2>");
    }

    #[test]
    fn test_sequential_headings_pass() {
        let html = "<h1>A</h1>\n<h2>B</h2>\n<h3>C</h3>\n<h2>D</h2>\n<h1>E</h1>";
        assert!(HeadingStructureRule.check(html).is_empty());
    }

    #[test]
    fn test_first_heading_is_never_flagged() {
        assert!(HeadingStructureRule.check("<h4>Deep start</h4>").is_empty());
    }

    #[test]
    fn test_flagged_heading_still_updates_tracker() {
        // h1 -> h3 is flagged, then h3 -> h4 is a single step and passes,
        // then h4 -> h6 is flagged against h4.
        let html = "<h1>a</h1>\n<h3>b</h3>\n<h4>c</h4>\n<h6>d</h6>";
        let issues = HeadingStructureRule.check(html);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].line_number, 2);
        assert_eq!(issues[1].line_number, 4);
        assert_eq!(issues[1].message, "Heading level skipped from h4 to h6");
    }

    #[test]
    fn test_every_line_matched_independently() {
        // Consecutive heading lines must all be seen; a carried-over match
        // cursor would miss alternate lines.
        let html = "<h1>a</h1>\n<h2>b</h2>\n<h4>c</h4>\n<h6>d</h6>";
        let issues = HeadingStructureRule.check(html);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].message, "Heading level skipped from h2 to h4");
        assert_eq!(issues[1].message, "Heading level skipped from h4 to h6");
    }

    #[test]
    fn test_attributes_and_case() {
        let html = "<H1 class=\"title\">A</H1>\n<h3 id=\"x\">B</h3>";
        assert_eq!(HeadingStructureRule.check(html).len(), 1);
    }

    #[test]
    fn test_non_heading_tags_ignored() {
        assert!(HeadingStructureRule.check("<h1>a</h1>\n<hr>\n<header>x</header>").is_empty());
    }
}
