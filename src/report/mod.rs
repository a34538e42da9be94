// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for audit results.
//!
//! Supports multiple output formats:
//! - Text: the plain audit report, one block per audited input
//! - JSON: audits plus totals (`criticalCount` is what CI scripts read)
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use crate::audit::AuditResult;
use crate::error::A11yError;
use crate::issue::Severity;
use crate::metrics::{self, AuditStatus, Summary};
use crate::rules::RULES;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(A11yError::UnknownFormat(other.to_string())),
        }
    }
}

/// Generate a report covering one or more audits
pub fn generate_report(audits: &[AuditResult], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(audits),
        OutputFormat::Json => generate_json_report(audits),
        OutputFormat::Sarif => generate_sarif_report(audits),
    }
}

/// Combined unfixed-issue counts across audits
pub fn overall_summary(audits: &[AuditResult]) -> Summary {
    audits
        .iter()
        .map(AuditResult::summary)
        .fold(Summary::default(), Summary::merge)
}

/// Failed if any audit failed
pub fn overall_status(audits: &[AuditResult]) -> AuditStatus {
    if audits.iter().any(AuditResult::is_failed) {
        AuditStatus::Failed
    } else {
        AuditStatus::Passed
    }
}

/// Generate human-readable text report
fn generate_text_report(audits: &[AuditResult]) -> String {
    if audits.is_empty() {
        return "No files were audited.\n".to_string();
    }

    audits
        .iter()
        .map(text_report_for)
        .collect::<Vec<_>>()
        .join("\n")
}

fn text_report_for(audit: &AuditResult) -> String {
    let mut output = String::new();

    output.push_str("ACCESSIBILITY AUDIT REPORT\n");
    output.push_str("===========================\n");
    output.push_str(&format!("File: {}\n", audit.file_name));
    output.push_str(&format!(
        "Date: {}\n",
        audit.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("Status: {}\n\n", audit.status));

    let summary = audit.summary();
    output.push_str("SUMMARY\n-------\n");
    output.push_str(&format!("Total Issues: {}\n", summary.total));
    for severity in Severity::ALL {
        output.push_str(&format!(
            "{}: {}\n",
            severity_heading(severity),
            summary.count(severity)
        ));
    }
    if summary.fixed > 0 {
        output.push_str(&format!("Fixed: {}\n", summary.fixed));
    }
    output.push_str(&format!("Passed Checks: {}\n", audit.passed));
    output.push_str(&format!(
        "Estimated Fix Time: {}\n\n",
        audit.estimated_fix_time()
    ));

    if audit.issues.is_empty() {
        output.push_str("No accessibility issues found. All checks passed.\n");
        return output;
    }

    output.push_str("ISSUES\n------\n");
    for issue in &audit.issues {
        let fixed = if issue.is_fixed { " (fixed)" } else { "" };
        output.push_str(&format!("[{}] {}{}\n", issue.severity, issue.kind, fixed));
        output.push_str(&format!("Line {}: {}\n", issue.line_number, issue.message));
        if !issue.code_snippet.is_empty() {
            output.push_str(&format!("Code: {}\n", issue.code_snippet));
        }
        output.push_str(&format!("Recommendation: {}\n", issue.recommendation));
        output.push_str(&format!("Fix: {}\n", issue.fix_example));
        output.push_str(&format!("WCAG: {} <{}>\n", issue.wcag_criteria, issue.wcag_link));
        output.push_str(&format!("Id: {}\n\n", issue.id));
    }

    output
}

fn severity_heading(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "Critical",
        Severity::Major => "Major",
        Severity::Minor => "Minor",
        Severity::Enhancement => "Enhancement",
    }
}

/// JSON report envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    critical_count: usize,
    total_issues: usize,
    estimated_fix_time: String,
    status: AuditStatus,
    audits: &'a [AuditResult],
}

/// Generate JSON report
fn generate_json_report(audits: &[AuditResult]) -> String {
    let summary = overall_summary(audits);
    let minutes: u32 = audits
        .iter()
        .map(|a| metrics::total_fix_minutes(&a.issues))
        .sum();

    let report = JsonReport {
        critical_count: summary.critical,
        total_issues: summary.total,
        estimated_fix_time: metrics::format_fix_time(minutes),
        status: overall_status(audits),
        audits,
    };

    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize report: {}\"}}", e)
    })
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Debug, Serialize)]
struct SarifRule {
    id: String,
    name: String,
    #[serde(rename = "shortDescription")]
    short_description: SarifMessage,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
    #[serde(rename = "helpUri")]
    help_uri: String,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
    region: SarifRegion,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Debug, Serialize)]
struct SarifRegion {
    #[serde(rename = "startLine")]
    start_line: usize,
}

fn sarif_level(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "error",
        Severity::Major => "warning",
        Severity::Minor | Severity::Enhancement => "note",
    }
}

/// Generate SARIF report; fixed issues are left out
fn generate_sarif_report(audits: &[AuditResult]) -> String {
    let results: Vec<SarifResult> = audits
        .iter()
        .flat_map(|audit| {
            audit.issues.iter().filter(|i| i.is_open()).map(|issue| SarifResult {
                rule_id: issue.rule_id.clone(),
                level: sarif_level(issue.severity).to_string(),
                message: SarifMessage {
                    text: format!("{}: {}", issue.kind, issue.message),
                },
                locations: vec![SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: audit.file_name.clone(),
                        },
                        region: SarifRegion {
                            start_line: issue.line_number,
                        },
                    },
                }],
                help_uri: issue.wcag_link.clone(),
            })
        })
        .collect();

    let rules = RULES
        .iter()
        .map(|rule| SarifRule {
            id: rule.id().to_string(),
            name: rule.name().to_string(),
            short_description: SarifMessage {
                text: rule.description().to_string(),
            },
        })
        .collect();

    let report = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "a11yscan".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    rules,
                },
            },
            results,
        }],
    };

    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize SARIF report: {}\"}}", e)
    })
}
