// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit records: one scan of one input plus its bookkeeping.
//!
//! Request validation (blank input, nothing selected) lives here rather
//! than in the scanner, which accepts anything.

use crate::error::{A11yError, Result};
use crate::issue::{Issue, Severity};
use crate::metrics::{self, AuditStatus, Summary};
use crate::rules::RULES;
use crate::scanner;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Nominal number of checks each selected rule performs
const CHECKS_PER_RULE: usize = 3;

/// The recorded outcome of one audit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub id: Uuid,
    pub file_name: String,
    pub timestamp: DateTime<Utc>,
    pub issues: Vec<Issue>,
    /// Estimated number of checks that found nothing
    pub passed: usize,
    pub status: AuditStatus,
}

impl AuditResult {
    /// Validate the request, scan `text` and record the result
    pub fn run<S: AsRef<str>>(file_name: &str, text: &str, selected: &[S]) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(A11yError::EmptyInput);
        }

        let rule_count = RULES
            .iter()
            .filter(|rule| selected.iter().any(|id| id.as_ref() == rule.id()))
            .count();
        if rule_count == 0 {
            return Err(A11yError::NoRulesSelected);
        }

        let issues = scanner::scan(text, selected);
        let passed = (rule_count * CHECKS_PER_RULE).saturating_sub(issues.len());
        let status = metrics::classify(&issues);

        Ok(Self {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            timestamp: Utc::now(),
            issues,
            passed,
            status,
        })
    }

    /// Mark one issue fixed and re-derive the status
    pub fn mark_issue_fixed(&mut self, issue_id: Uuid) -> Result<()> {
        let issue = self
            .issues
            .iter_mut()
            .find(|issue| issue.id == issue_id)
            .ok_or(A11yError::IssueNotFound(issue_id))?;
        issue.mark_fixed();
        self.status = metrics::classify(&self.issues);
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        Summary::from_issues(&self.issues)
    }

    pub fn estimated_fix_time(&self) -> String {
        metrics::estimate_fix_time(&self.issues)
    }

    pub fn is_failed(&self) -> bool {
        self.status == AuditStatus::Failed
    }

    /// A copy keeping only the issues of one severity; status is unchanged
    pub fn only_severity(&self, severity: Severity) -> AuditResult {
        let mut filtered = self.clone();
        filtered.issues.retain(|issue| issue.severity == severity);
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_rejected() {
        let err = AuditResult::run("page.html", "  \n\t", &["alt-text"]).unwrap_err();
        assert!(matches!(err, A11yError::EmptyInput));
    }

    #[test]
    fn test_no_known_rules_rejected() {
        let none: [&str; 0] = [];
        assert!(matches!(
            AuditResult::run("page.html", "<p>x</p>", &none),
            Err(A11yError::NoRulesSelected)
        ));
        assert!(matches!(
            AuditResult::run("page.html", "<p>x</p>", &["not-a-rule"]),
            Err(A11yError::NoRulesSelected)
        ));
    }

    #[test]
    fn test_only_severity() {
        let audit = AuditResult::run(
            "page.html",
            "<img src=\"x.png\">\n<p class=\"text-gray-300\">x</p>",
            &["alt-text", "color-contrast"],
        )
        .expect("valid request");

        let major = audit.only_severity(Severity::Major);
        assert_eq!(major.issues.len(), 1);
        assert_eq!(major.issues[0].kind, "Potential Low Contrast");
        assert_eq!(major.status, AuditStatus::Failed);
        assert_eq!(major.id, audit.id);
        assert!(audit.only_severity(Severity::Minor).issues.is_empty());
        assert_eq!(audit.issues.len(), 2);
    }

    #[test]
    fn test_failed_audit() {
        let audit = AuditResult::run("page.html", "<img src=\"x.png\">", &["alt-text", "tab-index"])
            .expect("valid request");
        assert_eq!(audit.file_name, "page.html");
        assert_eq!(audit.issues.len(), 1);
        assert_eq!(audit.passed, 5);
        assert_eq!(audit.status, AuditStatus::Failed);
        assert!(audit.is_failed());
    }

    #[test]
    fn test_passed_checks_never_negative() {
        let html = "<img a>\n<img b>\n<img c>\n<img d>";
        let audit = AuditResult::run("x.html", html, &["alt-text"]).expect("valid request");
        assert_eq!(audit.issues.len(), 4);
        assert_eq!(audit.passed, 0);
    }

    #[test]
    fn test_duplicate_ids_count_once() {
        let audit = AuditResult::run("x.html", "<p>ok</p>", &["tab-index", "tab-index"])
            .expect("valid request");
        assert_eq!(audit.passed, 3);
        assert_eq!(audit.status, AuditStatus::Passed);
    }

    #[test]
    fn test_mark_fixed_updates_status() {
        let mut audit = AuditResult::run("x.html", "<button></button>", &["empty-buttons"])
            .expect("valid request");
        assert!(audit.is_failed());
        assert_eq!(audit.estimated_fix_time(), "15 minutes");

        let issue_id = audit.issues[0].id;
        audit.mark_issue_fixed(issue_id).expect("issue exists");
        assert!(audit.issues[0].is_fixed);
        assert_eq!(audit.status, AuditStatus::Passed);
        assert_eq!(audit.summary().fixed, 1);
        assert_eq!(audit.estimated_fix_time(), "0 minutes");
    }

    #[test]
    fn test_mark_unknown_issue() {
        let mut audit =
            AuditResult::run("x.html", "<p>x</p>", &["alt-text"]).expect("valid request");
        let missing = Uuid::new_v4();
        assert!(matches!(
            audit.mark_issue_fixed(missing),
            Err(A11yError::IssueNotFound(id)) if id == missing
        ));
    }

    #[test]
    fn test_json_shape() {
        let audit =
            AuditResult::run("x.html", "<img src=x>", &["alt-text"]).expect("valid request");
        let json = serde_json::to_value(&audit).expect("serializable");
        assert_eq!(json["fileName"], "x.html");
        assert_eq!(json["status"], "failed");
        assert!(json["timestamp"].is_string());
        assert_eq!(json["issues"][0]["ruleId"], "alt-text");
    }
}
