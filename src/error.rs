// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for a11yscan
//!
//! The scanning engine itself is infallible. These errors come from the
//! layers around it: request validation, configuration, history and I/O.

use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, A11yError>;

#[derive(Error, Debug)]
pub enum A11yError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Please provide code to scan")]
    EmptyInput,

    #[error("Please select at least one scanning rule")]
    NoRulesSelected,

    #[error("Audit not found: {0}")]
    AuditNotFound(Uuid),

    #[error("Issue not found: {0}")]
    IssueNotFound(Uuid),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}
