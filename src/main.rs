// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11yscan CLI - lexical WCAG accessibility scanner

use a11yscan::audit::AuditResult;
use a11yscan::config::{self, Config};
use a11yscan::history::{default_history_path, AuditHistory};
use a11yscan::report::{generate_report, overall_status, overall_summary, OutputFormat};
use a11yscan::rules::RULES;
use a11yscan::scanner;
use a11yscan::{AuditStatus, Severity};
use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Lexical WCAG accessibility scanner for HTML, JSX and TSX sources
#[derive(Parser)]
#[command(name = "a11yscan")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available rules
    Rules {
        /// Output format
        #[arg(long, default_value = "text")]
        format: ListFormatArg,
    },

    /// Scan a single file ("-" reads stdin)
    Scan {
        /// File to scan
        file: PathBuf,

        #[command(flatten)]
        opts: ScanOpts,
    },

    /// Scan every matching file under a directory
    Check {
        /// Directory to scan
        dir: PathBuf,

        #[command(flatten)]
        opts: ScanOpts,
    },

    /// Inspect and update saved audits
    History {
        /// History file (defaults to the user data directory)
        #[arg(long, global = true)]
        history: Option<PathBuf>,

        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Write a default configuration file
    Init {
        /// Where to write it
        #[arg(default_value = config::CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct ScanOpts {
    /// Rule ids to run, comma separated (defaults to the configuration)
    #[arg(long, value_delimiter = ',')]
    rules: Vec<String>,

    /// Configuration file (defaults to ./a11yscan.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format (defaults to the configuration)
    #[arg(long)]
    format: Option<FormatArg>,

    /// Output file (stdout if not specified)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Record the audits in the history file
    #[arg(long)]
    save: bool,

    /// History file used with --save
    #[arg(long)]
    history: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List saved audits, newest first
    List,

    /// Show one audit (the latest when no id is given)
    Show {
        audit: Option<Uuid>,

        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Only show issues of this severity
        #[arg(long)]
        severity: Option<SeverityArg>,
    },

    /// Mark an issue of a saved audit as fixed
    Fix { audit: Uuid, issue: Uuid },

    /// Export every saved audit as JSON
    Export {
        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeverityArg {
    Critical,
    Major,
    Minor,
    Enhancement,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Critical => Severity::Critical,
            SeverityArg::Major => Severity::Major,
            SeverityArg::Minor => Severity::Minor,
            SeverityArg::Enhancement => Severity::Enhancement,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ListFormatArg {
    Text,
    Json,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("a11yscan=debug")
    } else {
        EnvFilter::new("a11yscan=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rules { format } => {
            init_logging(false);
            print_rules(format)?;
        }

        Commands::Scan { file, opts } => {
            init_logging(opts.verbose);
            let config = resolve_config(&opts)?;
            let selected = config.selected_rules();
            let audit = if file == Path::new("-") {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read stdin")?;
                AuditResult::run("stdin", &text, &selected)?
            } else {
                scanner::scan_file(&file, &selected)
                    .with_context(|| format!("failed to scan {}", file.display()))?
            };
            finish(vec![audit], &config, &opts)?;
        }

        Commands::Check { dir, opts } => {
            init_logging(opts.verbose);
            let config = resolve_config(&opts)?;
            let audits = scanner::scan_directory(&dir, &config)
                .with_context(|| format!("failed to scan {}", dir.display()))?;
            finish(audits, &config, &opts)?;
        }

        Commands::History { history, action } => {
            init_logging(false);
            let path = history.unwrap_or_else(default_history_path);
            run_history(&path, action)?;
        }

        Commands::Init { path, force } => {
            init_logging(false);
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
            }
            config::write_default_config(&path)?;
            eprintln!("Configuration written to {}", path.display());
        }
    }

    Ok(())
}

/// Load the configuration and apply command-line overrides
fn resolve_config(opts: &ScanOpts) -> anyhow::Result<Config> {
    let path = opts
        .config
        .clone()
        .or_else(|| config::discover_config(Path::new(".")));

    let mut config = match path {
        Some(p) => config::load_config(&p)
            .with_context(|| format!("failed to load configuration {}", p.display()))?,
        None => Config::default(),
    };

    let env_format = std::env::var(config::FORMAT_ENV_VAR).ok();
    config
        .apply_format_override(env_format.as_deref())
        .with_context(|| format!("invalid {}", config::FORMAT_ENV_VAR))?;
    if !opts.rules.is_empty() {
        config.rules = opts.rules.clone();
    }
    if let Some(format) = opts.format {
        config.output.format = format.into();
    }
    if let Some(output) = &opts.output {
        config.output.file = Some(output.clone());
    }

    Ok(config)
}

/// Report, optionally record, and exit non-zero when the gate fails
fn finish(audits: Vec<AuditResult>, config: &Config, opts: &ScanOpts) -> anyhow::Result<()> {
    let report = generate_report(&audits, config.output.format);
    write_output(&report, config.output.file.as_deref())?;

    let violations = config.thresholds.violations(&overall_summary(&audits));
    for violation in &violations {
        eprintln!("Threshold exceeded: {}", violation);
    }
    let failed = overall_status(&audits) == AuditStatus::Failed || !violations.is_empty();

    if opts.save {
        let path = opts.history.clone().unwrap_or_else(default_history_path);
        let mut history = AuditHistory::load(&path)?;
        for audit in audits {
            history.add(audit);
        }
        history.save()?;
        eprintln!("Audit history updated: {}", history.path().display());
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn run_history(path: &Path, action: HistoryAction) -> anyhow::Result<()> {
    let mut history = AuditHistory::load(path)
        .with_context(|| format!("failed to load history {}", path.display()))?;

    match action {
        HistoryAction::List => {
            if history.is_empty() {
                println!("No saved audits.");
            }
            for audit in history.audits() {
                let summary = audit.summary();
                println!(
                    "{}  {}  {:<6}  {} issue(s), {} critical  {}",
                    audit.id,
                    audit.timestamp.format("%Y-%m-%d %H:%M"),
                    audit.status,
                    summary.total,
                    summary.critical,
                    audit.file_name
                );
            }
            if !history.is_empty() {
                let totals = history.totals();
                println!(
                    "{} audit(s): {} passed, {} failed, {} open issue(s)",
                    history.len(),
                    totals.passed,
                    totals.failed,
                    totals.open_issues
                );
            }
        }

        HistoryAction::Show {
            audit,
            format,
            severity,
        } => {
            let found = match audit {
                Some(id) => history.get(id),
                None => history.latest(),
            };
            let audit = found.context("no matching audit in history")?;
            let shown = match severity {
                Some(severity) => audit.only_severity(severity.into()),
                None => audit.clone(),
            };
            println!("{}", generate_report(&[shown], format.into()));
        }

        HistoryAction::Fix { audit, issue } => {
            history.mark_issue_fixed(audit, issue)?;
            history.save()?;
            eprintln!("Issue {} marked as fixed in {}", issue, history.path().display());
        }

        HistoryAction::Export { output } => {
            write_output(&history.export_json()?, output.as_deref())?;
        }
    }

    Ok(())
}

fn print_rules(format: ListFormatArg) -> anyhow::Result<()> {
    match format {
        ListFormatArg::Json => {
            println!("{}", serde_json::to_string_pretty(&a11yscan::list_rules())?);
        }
        ListFormatArg::Text => {
            for rule in RULES {
                println!("{:<18} {:<26} {}", rule.id(), rule.name(), rule.description());
            }
        }
    }
    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
