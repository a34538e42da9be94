// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration for a11yscan (`a11yscan.toml`)
//!
//! Every key is optional; a missing file means the defaults: all rules,
//! the usual web source extensions, and failing on any critical issue.

use crate::error::{A11yError, Result};
use crate::metrics::Summary;
use crate::report::OutputFormat;
use crate::rules::{find_rule, RULES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// File name looked up by [`discover_config`]
pub const CONFIG_FILE_NAME: &str = "a11yscan.toml";

/// Overrides `output.format` when set; the `--format` flag still wins
pub const FORMAT_ENV_VAR: &str = "A11YSCAN_FORMAT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rule ids to run
    pub rules: Vec<String>,
    pub scan: ScanConfig,
    pub thresholds: Thresholds,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: RULES.iter().map(|rule| rule.id().to_string()).collect(),
            scan: ScanConfig::default(),
            thresholds: Thresholds::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Known rule ids from `rules`, deduplicated, in the order given.
    ///
    /// Unknown ids are reported and dropped.
    pub fn selected_rules(&self) -> Vec<String> {
        let mut selected: Vec<String> = Vec::new();
        for id in &self.rules {
            if find_rule(id).is_none() {
                warn!("Ignoring unknown rule id in configuration: {}", id);
                continue;
            }
            if !selected.contains(id) {
                selected.push(id.clone());
            }
        }
        selected
    }

    /// Set the output format from its textual name, ignoring blank values
    pub fn apply_format_override(&mut self, value: Option<&str>) -> Result<()> {
        if let Some(name) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.output.format = name.parse()?;
        }
        Ok(())
    }
}

/// Which files a directory scan looks at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions to scan, without the dot
    pub extensions: Vec<String>,
    /// Directory names to skip
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: ["html", "htm", "jsx", "tsx", "js", "ts"]
                .into_iter()
                .map(String::from)
                .collect(),
            exclude: [
                "node_modules", ".git", "target", "dist", "build", "_build", "vendor", ".next",
                "coverage",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl ScanConfig {
    pub fn is_scannable(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }

    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude.iter().any(|name| name == dir_name)
    }
}

/// CI gate: maximum number of unfixed issues allowed per severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<usize>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            critical: Some(0),
            major: None,
            minor: None,
        }
    }
}

impl Thresholds {
    /// One message per exceeded threshold
    pub fn violations(&self, summary: &Summary) -> Vec<String> {
        [
            ("critical", self.critical, summary.critical),
            ("major", self.major, summary.major),
            ("minor", self.minor, summary.minor),
        ]
        .into_iter()
        .filter_map(|(label, limit, count)| {
            let limit = limit?;
            (count > limit).then(|| {
                format!("{} {} issue(s) exceed the threshold of {}", count, label, limit)
            })
        })
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Look for `a11yscan.toml` in `dir`
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| A11yError::Config(format!("TOML parse error: {}", e)))
}

pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(&config)
        .map_err(|e| A11yError::Config(format!("TOML serialize error: {}", e)))?;
    std::fs::write(path, content)?;
    Ok(())
}
