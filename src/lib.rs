// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11yscan - lexical WCAG accessibility scanner
//!
//! A registry of independent rules, each looking at HTML/JSX source text
//! for one accessibility defect pattern and reporting issues with a
//! severity, a line, a suggested fix and a WCAG citation. This is a
//! best-effort pattern scanner over lines of text, not an HTML parser.
//!
//! ## Rules
//!
//! - **alt-text** (1.1.1): images without alt text
//! - **aria-roles** (4.1.2): button/link roles on generic containers
//! - **heading-structure** (1.3.1): skipped heading levels
//! - **form-labels** (1.3.1): inputs without an accessible label
//! - **keyboard-traps** (2.1.2): click handlers on unfocusable elements
//! - **color-contrast** (1.4.3): light gray text utilities
//! - **landmarks** (1.3.1): missing main/navigation regions
//! - **empty-buttons** (4.1.2): buttons without content
//! - **lang-attribute** (3.1.1): `<html>` without `lang`
//! - **motion-warnings** (2.3.3): looping animations without a reduced-motion guard
//! - **tab-index** (2.4.3): positive tabindex values
//!
//! ## Usage
//!
//! ```
//! use a11yscan::{estimate_fix_time, list_rules, scan};
//!
//! let ids: Vec<&str> = list_rules().into_iter().map(|r| r.id).collect();
//! let issues = scan("<main><nav></nav><img src=\"logo.png\"></main>", &ids);
//! assert_eq!(issues.len(), 1);
//! assert_eq!(estimate_fix_time(&issues), "15 minutes");
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod history;
pub mod issue;
pub mod metrics;
pub mod report;
pub mod rules;
pub mod scanner;

pub use audit::AuditResult;
pub use error::{A11yError, Result};
pub use issue::{Issue, Severity};
pub use metrics::{classify, estimate_fix_time, AuditStatus, Summary};
pub use rules::{list_rules, Rule, RuleInfo};
pub use scanner::scan;
