// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scan orchestration.
//!
//! [`scan`] runs the selected rules over one text. [`scan_file`] and
//! [`scan_directory`] read sources from disk and wrap each scan in an
//! [`AuditResult`].

use crate::audit::AuditResult;
use crate::config::Config;
use crate::error::{A11yError, Result};
use crate::issue::Issue;
use crate::rules::RULES;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Run every selected rule over `text`.
///
/// Rules run in registration order, each at most once, and their issues are
/// concatenated in the order each rule found them. Unknown and duplicate ids
/// in `selected` are ignored; an empty selection yields no issues.
pub fn scan<S: AsRef<str>>(text: &str, selected: &[S]) -> Vec<Issue> {
    let mut issues = Vec::new();

    for rule in RULES {
        if !selected.iter().any(|id| id.as_ref() == rule.id()) {
            continue;
        }

        let found = rule.check(text);
        debug!(rule = rule.id(), issues = found.len(), "rule finished");

        issues.extend(found.into_iter().map(|mut issue| {
            issue.rule_id = rule.id().to_string();
            issue
        }));
    }

    issues
}

/// Audit a single file
pub fn scan_file<S: AsRef<str>>(path: &Path, selected: &[S]) -> Result<AuditResult> {
    let content = std::fs::read_to_string(path)?;
    AuditResult::run(&path.display().to_string(), &content, selected)
}

/// Audit every scannable file under `dir`.
///
/// Hidden directories and `config.scan.exclude` are skipped. Unreadable or
/// blank files below `dir` are logged and skipped; a missing or unreadable
/// `dir` itself is an error.
pub fn scan_directory(dir: &Path, config: &Config) -> Result<Vec<AuditResult>> {
    let selected = config.selected_rules();
    if selected.is_empty() {
        return Err(A11yError::NoRulesSelected);
    }

    let mut audits = Vec::new();

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_str().unwrap_or("");
            if e.depth() > 0 && e.file_type().is_dir() {
                return !config.scan.is_excluded(name) && !name.starts_with('.');
            }
            true
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => return Err(A11yError::Io(e.into())),
            Err(e) => {
                info!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !config.scan.is_scannable(ext) {
            continue;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                info!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        match AuditResult::run(&path.display().to_string(), &content, &selected) {
            Ok(audit) => audits.push(audit),
            Err(A11yError::EmptyInput) => info!("Skipping {}: empty file", path.display()),
            Err(e) => return Err(e),
        }
    }

    info!(
        "Scanned {} files, found {} issues",
        audits.len(),
        audits.iter().map(|a| a.issues.len()).sum::<usize>()
    );

    Ok(audits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Severity;
    use crate::rules::list_rules;

    fn all_ids() -> Vec<&'static str> {
        list_rules().into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_selection() {
        let none: [&str; 0] = [];
        assert!(scan("<img src=\"x.png\">", &none).is_empty());
    }

    #[test]
    fn test_unknown_and_duplicate_ids_ignored() {
        let issues = scan("<img src=\"x.png\">", &["alt-text", "bogus", "alt-text"]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule_id, "alt-text");
    }

    #[test]
    fn test_registration_order_not_selection_order() {
        let html = "<main><nav></nav>\n<button></button><img src=\"a.png\"></main>";
        let issues = scan(html, &["empty-buttons", "alt-text"]);
        let rules: Vec<_> = issues.iter().map(|i| i.rule_id.as_str()).collect();
        assert_eq!(rules, vec!["alt-text", "empty-buttons"]);
    }

    #[test]
    fn test_empty_text() {
        let issues = scan("", &all_ids());
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.rule_id == "landmarks"));
    }

    #[test]
    fn test_landmarks_and_lang_without_html() {
        let issues = scan("<div>hello</div>", &["landmarks", "lang-attribute"]);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].kind, "Missing Main Landmark");
        assert_eq!(issues[0].severity, Severity::Major);
        assert_eq!(issues[1].kind, "Missing Navigation Landmark");
        assert_eq!(issues[1].severity, Severity::Minor);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let html = "<html>\n<h1>a</h1>\n<h4>b</h4>\n<img src=x>\n<input name=q>";
        let key = |issues: Vec<Issue>| {
            issues
                .into_iter()
                .map(|i| (i.kind, i.severity, i.line_number, i.message, i.code_snippet))
                .collect::<Vec<_>>()
        };
        assert_eq!(key(scan(html, &all_ids())), key(scan(html, &all_ids())));
    }

    #[test]
    fn test_scan_nonexistent_dir() {
        let result = scan_directory(Path::new("/nonexistent/path"), &Config::default());
        assert!(matches!(result, Err(A11yError::Io(_))));
    }

    #[test]
    fn test_scan_directory_skips_blank_and_unscannable() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("blank.html"), "  \n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "<img src=a.png>").unwrap();
        std::fs::write(dir.path().join("page.html"), "<img src=a.png>").unwrap();

        let audits = scan_directory(dir.path(), &Config::default()).unwrap();
        assert_eq!(audits.len(), 1);
        assert!(audits[0].file_name.ends_with("page.html"));
    }
}
