// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit history stored as a JSON array, newest audit first.

use crate::audit::AuditResult;
use crate::error::{A11yError, Result};
use crate::metrics::AuditStatus;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Default location: `<data dir>/a11yscan/audits.json`
pub fn default_history_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("a11yscan")
        .join("audits.json")
}

/// Counts across every stored audit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryTotals {
    pub passed: usize,
    pub failed: usize,
    /// Unfixed issues of any severity
    pub open_issues: usize,
}

/// Past audits backed by a JSON file
#[derive(Debug, Clone)]
pub struct AuditHistory {
    path: PathBuf,
    audits: Vec<AuditResult>,
}

impl AuditHistory {
    /// Load history from `path`; a missing file is an empty history
    pub fn load(path: &Path) -> Result<Self> {
        let audits = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            audits,
        })
    }

    /// Write history back to its file, creating parent directories
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, self.export_json()?)?;
        info!("Saved {} audits to {}", self.audits.len(), self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a new audit as the most recent one
    pub fn add(&mut self, audit: AuditResult) {
        self.audits.insert(0, audit);
    }

    /// All audits, newest first
    pub fn audits(&self) -> &[AuditResult] {
        &self.audits
    }

    pub fn get(&self, id: Uuid) -> Option<&AuditResult> {
        self.audits.iter().find(|audit| audit.id == id)
    }

    pub fn latest(&self) -> Option<&AuditResult> {
        self.audits.first()
    }

    /// Mark an issue of a stored audit as fixed
    pub fn mark_issue_fixed(&mut self, audit_id: Uuid, issue_id: Uuid) -> Result<()> {
        self.audits
            .iter_mut()
            .find(|audit| audit.id == audit_id)
            .ok_or(A11yError::AuditNotFound(audit_id))?
            .mark_issue_fixed(issue_id)
    }

    pub fn totals(&self) -> HistoryTotals {
        self.audits
            .iter()
            .fold(HistoryTotals::default(), |mut totals, audit| {
                match audit.status {
                    AuditStatus::Passed => totals.passed += 1,
                    AuditStatus::Failed => totals.failed += 1,
                }
                totals.open_issues += audit.summary().total;
                totals
            })
    }

    /// Pretty JSON of every stored audit
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.audits)?)
    }

    pub fn len(&self) -> usize {
        self.audits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn audit(text: &str) -> AuditResult {
        AuditResult::run("page.html", text, &["alt-text", "empty-buttons"]).expect("valid request")
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let history = AuditHistory::load(&dir.path().join("audits.json")).unwrap();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_newest_first() {
        let dir = TempDir::new().unwrap();
        let mut history = AuditHistory::load(&dir.path().join("audits.json")).unwrap();
        let first = audit("<p>one</p>");
        let second = audit("<p>two</p>");
        let second_id = second.id;

        history.add(first);
        history.add(second);

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().map(|a| a.id), Some(second_id));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("audits.json");

        let mut history = AuditHistory::load(&path).unwrap();
        let recorded = audit("<img src=\"x.png\">");
        let audit_id = recorded.id;
        let issue_id = recorded.issues[0].id;
        history.add(recorded);
        history.mark_issue_fixed(audit_id, issue_id).unwrap();
        history.save().unwrap();

        let reloaded = AuditHistory::load(&path).unwrap();
        let stored = reloaded.get(audit_id).expect("audit persisted");
        assert!(stored.issues[0].is_fixed);
        assert_eq!(stored.status, AuditStatus::Passed);
        assert_eq!(stored, history.get(audit_id).unwrap());
    }

    #[test]
    fn test_totals() {
        let dir = TempDir::new().unwrap();
        let mut history = AuditHistory::load(&dir.path().join("audits.json")).unwrap();
        assert_eq!(history.totals(), HistoryTotals::default());

        let failing = audit("<img src=\"a.png\">\n<button></button>");
        let failing_id = failing.id;
        let first_issue = failing.issues[0].id;
        history.add(failing);
        history.add(audit("<p>fine</p>"));
        assert_eq!(
            history.totals(),
            HistoryTotals {
                passed: 1,
                failed: 1,
                open_issues: 2,
            }
        );

        history.mark_issue_fixed(failing_id, first_issue).unwrap();
        let totals = history.totals();
        assert_eq!((totals.failed, totals.open_issues), (1, 1));
    }

    #[test]
    fn test_mark_fixed_unknown_audit() {
        let dir = TempDir::new().unwrap();
        let mut history = AuditHistory::load(&dir.path().join("audits.json")).unwrap();
        let missing = Uuid::new_v4();
        assert!(matches!(
            history.mark_issue_fixed(missing, Uuid::new_v4()),
            Err(A11yError::AuditNotFound(id)) if id == missing
        ));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("audits.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(AuditHistory::load(&path), Err(A11yError::Json(_))));
    }
}
