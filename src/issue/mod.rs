// SPDX-License-Identifier: PMPL-1.0-or-later
//! Diagnostic model: the `Issue` produced by every rule and its severity.
//!
//! Issues serialize with camelCase keys (`lineNumber`, `codeSnippet`,
//! `isFixed`, ...) so saved audits and JSON reports stay readable by the
//! tools that already consume them.

pub mod wcag;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wcag::Criterion;

/// Severity of an accessibility issue, most urgent first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks users outright - fails the audit
    Critical,
    /// Serious barrier, should be fixed before release
    Major,
    /// Degrades the experience
    Minor,
    /// Best-practice improvement
    Enhancement,
}

impl Severity {
    /// Every severity, in order of urgency
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::Major,
        Severity::Minor,
        Severity::Enhancement,
    ];

    /// Estimated minutes needed to fix one issue of this severity
    pub fn fix_minutes(self) -> u32 {
        match self {
            Severity::Critical => 15,
            Severity::Major => 10,
            Severity::Minor => 5,
            Severity::Enhancement => 3,
        }
    }

    /// Whether an unfixed issue of this severity fails an audit
    pub fn blocks_release(self) -> bool {
        matches!(self, Severity::Critical)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Major => write!(f, "MAJOR"),
            Severity::Minor => write!(f, "MINOR"),
            Severity::Enhancement => write!(f, "ENHANCEMENT"),
        }
    }
}

/// One accessibility finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique per finding, not stable across scans
    pub id: Uuid,
    /// Id of the rule that produced this issue
    #[serde(default)]
    pub rule_id: String,
    /// Short category name, e.g. "Missing Alt Text"
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub message: String,
    /// 1-based; document-level issues report line 1
    pub line_number: usize,
    pub code_snippet: String,
    pub recommendation: String,
    pub fix_example: String,
    pub wcag_criteria: String,
    pub wcag_link: String,
    /// Owned by whoever tracks remediation, never set by a rule
    #[serde(default)]
    pub is_fixed: bool,
}

impl Issue {
    /// Create a new issue on line 1 with empty guidance
    pub fn new(kind: &str, severity: Severity, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            rule_id: String::new(),
            kind: kind.to_string(),
            severity,
            message: message.to_string(),
            line_number: 1,
            code_snippet: String::new(),
            recommendation: String::new(),
            fix_example: String::new(),
            wcag_criteria: String::new(),
            wcag_link: String::new(),
            is_fixed: false,
        }
    }

    /// Set the 1-based line number
    pub fn at_line(mut self, line: usize) -> Self {
        self.line_number = line;
        self
    }

    /// Set the offending excerpt (trimmed)
    pub fn with_snippet(mut self, snippet: &str) -> Self {
        self.code_snippet = snippet.trim().to_string();
        self
    }

    /// Set the remediation guidance
    pub fn with_recommendation(mut self, recommendation: &str) -> Self {
        self.recommendation = recommendation.to_string();
        self
    }

    /// Set the corrected snippet or template
    pub fn with_fix_example(mut self, fix_example: &str) -> Self {
        self.fix_example = fix_example.to_string();
        self
    }

    /// Cite a WCAG success criterion
    pub fn with_wcag(mut self, criterion: &Criterion) -> Self {
        self.wcag_criteria = criterion.label();
        self.wcag_link = criterion.link();
        self
    }

    /// Mark as fixed
    pub fn mark_fixed(&mut self) {
        self.is_fixed = true;
    }

    /// Whether this issue still counts against an audit
    pub fn is_open(&self) -> bool {
        !self.is_fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let issue = Issue::new("Empty Button", Severity::Critical, "Button has no accessible name")
            .at_line(4)
            .with_snippet("   <button></button>  ")
            .with_wcag(&wcag::NAME_ROLE_VALUE);

        assert_eq!(issue.line_number, 4);
        assert_eq!(issue.code_snippet, "<button></button>");
        assert_eq!(issue.wcag_criteria, "4.1.2 Name, Role, Value (Level A)");
        assert!(issue.wcag_link.ends_with("name-role-value.html"));
        assert!(issue.is_open());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Issue::new("X", Severity::Minor, "m");
        let b = Issue::new("X", Severity::Minor, "m");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serializes_camel_case() {
        let issue = Issue::new("Missing Alt Text", Severity::Critical, "msg").at_line(2);
        let json = serde_json::to_value(&issue).expect("serializable");
        assert_eq!(json["type"], "Missing Alt Text");
        assert_eq!(json["severity"], "critical");
        assert_eq!(json["lineNumber"], 2);
        assert_eq!(json["isFixed"], false);
        assert!(json.get("codeSnippet").is_some());
    }

    #[test]
    fn test_severity_weights() {
        assert_eq!(Severity::Critical.fix_minutes(), 15);
        assert_eq!(Severity::Major.fix_minutes(), 10);
        assert_eq!(Severity::Minor.fix_minutes(), 5);
        assert_eq!(Severity::Enhancement.fix_minutes(), 3);
        assert!(Severity::Critical.blocks_release());
        assert!(!Severity::Major.blocks_release());
    }

    #[test]
    fn test_mark_fixed() {
        let mut issue = Issue::new("X", Severity::Major, "m");
        issue.mark_fixed();
        assert!(!issue.is_open());
    }
}
