// SPDX-License-Identifier: PMPL-1.0-or-later
//! ARIA role rule - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! `role="button"` and `role="link"` on a `<div>` or `<span>` reinvent a
//! native element. Lines that already contain the native element are left
//! alone.

use crate::issue::wcag::NAME_ROLE_VALUE;
use crate::issue::{Issue, Severity};
use crate::rules::{numbered_lines, Rule};

/// Role literals that have a native HTML replacement, with that replacement
const REPLACEABLE_ROLES: &[(&str, &str)] = &[
    (r#"role="button""#, "<button>Click me</button>"),
    (r#"role="link""#, "<a href=\"#\">Link text</a>"),
];

/// Flags ARIA roles on generic containers
pub struct AriaRoleRule;

impl Rule for AriaRoleRule {
    fn id(&self) -> &'static str {
        "aria-roles"
    }

    fn name(&self) -> &'static str {
        "ARIA Roles"
    }

    fn description(&self) -> &'static str {
        "Checks for button/link roles on <div> and <span> elements (WCAG 4.1.2)"
    }

    fn check(&self, text: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (line_num, line) in numbered_lines(text) {
            if !on_generic_container(line) {
                continue;
            }
            for (role, native) in REPLACEABLE_ROLES {
                if !line.contains(role) {
                    continue;
                }
                issues.push(
                    Issue::new(
                        "Incorrect ARIA Role Usage",
                        Severity::Major,
                        &format!(
                            "Using {} on a non-semantic element. Use the native element instead.",
                            role
                        ),
                    )
                    .at_line(line_num)
                    .with_snippet(line)
                    .with_recommendation(
                        "Use native HTML elements (<button>, <a>) instead of ARIA roles when possible",
                    )
                    .with_fix_example(native)
                    .with_wcag(&NAME_ROLE_VALUE),
                );
            }
        }

        issues
    }
}

/// A `<div>`/`<span>` line with no native button or anchor on it
fn on_generic_container(line: &str) -> bool {
    let native = line.contains("<button") || line.contains("<a ");
    let generic = line.contains("<div") || line.contains("<span");
    generic && !native
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_button_role() {
        let issues = AriaRoleRule.check(r#"<div role="button" onClick={go}>Go</div>"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Major);
        assert!(issues[0].message.contains(r#"role="button""#));
        assert_eq!(issues[0].fix_example, "<button>Click me</button>");
    }

    #[test]
    fn test_span_link_role() {
        let issues = AriaRoleRule.check("\n  <span role=\"link\">More</span>  ");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line_number, 2);
        assert_eq!(issues[0].code_snippet, r#"<span role="link">More</span>"#);
    }

    #[test]
    fn test_both_roles_on_one_line() {
        let line = r#"<div role="button"></div><span role="link"></span>"#;
        assert_eq!(AriaRoleRule.check(line).len(), 2);
    }

    #[test]
    fn test_native_element_on_line_suppresses() {
        assert!(AriaRoleRule.check(r#"<div role="button"><button>x</button></div>"#).is_empty());
        assert!(AriaRoleRule.check(r##"<span role="link"><a href="#">x</a></span>"##).is_empty());
    }

    #[test]
    fn test_role_without_generic_container() {
        assert!(AriaRoleRule.check(r#"<li role="button">x</li>"#).is_empty());
    }
}
