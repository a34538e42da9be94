// SPDX-License-Identifier: PMPL-1.0-or-later
//! Summary metrics derived from a scan: fix-time estimate, pass/fail
//! status and per-severity counts. Fixed issues never count.

use crate::issue::{Issue, Severity};
use serde::{Deserialize, Serialize};

/// Outcome of an audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Passed,
    Failed,
}

impl std::fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditStatus::Passed => write!(f, "PASSED"),
            AuditStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Failed iff at least one unfixed issue is critical
pub fn classify(issues: &[Issue]) -> AuditStatus {
    if issues
        .iter()
        .any(|issue| issue.is_open() && issue.severity.blocks_release())
    {
        AuditStatus::Failed
    } else {
        AuditStatus::Passed
    }
}

/// Total estimated minutes to fix all unfixed issues
pub fn total_fix_minutes(issues: &[Issue]) -> u32 {
    issues
        .iter()
        .filter(|issue| issue.is_open())
        .map(|issue| issue.severity.fix_minutes())
        .sum()
}

/// Render minutes as `"N minutes"` below an hour, `"Hh Mm"` otherwise
pub fn format_fix_time(minutes: u32) -> String {
    if minutes < 60 {
        format!("{} minutes", minutes)
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}

/// Estimated remediation time for the unfixed issues, e.g. `"1h 5m"`
pub fn estimate_fix_time(issues: &[Issue]) -> String {
    format_fix_time(total_fix_minutes(issues))
}

/// Unfixed issue counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Unfixed issues of any severity
    pub total: usize,
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
    pub enhancement: usize,
    pub fixed: usize,
}

impl Summary {
    pub fn from_issues(issues: &[Issue]) -> Self {
        issues.iter().fold(Self::default(), |mut summary, issue| {
            if issue.is_fixed {
                summary.fixed += 1;
                return summary;
            }
            summary.total += 1;
            match issue.severity {
                Severity::Critical => summary.critical += 1,
                Severity::Major => summary.major += 1,
                Severity::Minor => summary.minor += 1,
                Severity::Enhancement => summary.enhancement += 1,
            }
            summary
        })
    }

    /// Unfixed count for one severity
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::Major => self.major,
            Severity::Minor => self.minor,
            Severity::Enhancement => self.enhancement,
        }
    }

    /// Combine summaries of several audits
    pub fn merge(self, other: Summary) -> Summary {
        Summary {
            total: self.total + other.total,
            critical: self.critical + other.critical,
            major: self.major + other.major,
            minor: self.minor + other.minor,
            enhancement: self.enhancement + other.enhancement,
            fixed: self.fixed + other.fixed,
        }
    }
}
