//! CLI argument definitions for the translation sheet tooling.

use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use botc_validate::ValidationOptions;

use crate::logging::{LogConfig, LogFormat};

/// Default location of the characters export.
pub const DEFAULT_CHARACTERS_CSV: &str = "assets/csv/ko_KR.csv";
/// Default location of the scripts export.
pub const DEFAULT_SCRIPTS_CSV: &str = "assets/csv/scripts.csv";
/// Default location of the public scripts catalog.
pub const DEFAULT_SCRIPTS_JSON: &str = "public/scripts.json";

#[derive(Parser)]
#[command(
    name = "botc",
    version,
    about = "Translation sheet tooling - validate, scrub and export CSV exports",
    long_about = "Validate the characters and scripts CSV exports from the translation sheet,\n\
                  scrub control characters from them, and generate the public scripts catalog."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormat,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging setup implied by the global flags.
    ///
    /// `--log-level` beats `-v`/`-q`, and either one disables `RUST_LOG`.
    /// With `--color auto`, ANSI is used only when logging to a terminal.
    pub fn log_config(&self, stderr_is_terminal: bool) -> LogConfig {
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && stderr_is_terminal,
        };
        LogConfig {
            level_filter,
            use_env_filter: !self.verbosity.is_present() && self.log_level.is_none(),
            with_ansi,
            format: self.log_format,
            log_file: self.log_file.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the characters and scripts CSV exports.
    Validate(ValidateArgs),

    /// Remove control characters (except TAB/LF/CR) from CSV files in place.
    Sanitize(SanitizeArgs),

    /// Generate the public scripts.json catalog from the scripts CSV.
    GenerateScripts(GenerateArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the characters CSV export.
    #[arg(long = "characters", value_name = "PATH", default_value = DEFAULT_CHARACTERS_CSV)]
    pub characters: PathBuf,

    /// Path to the scripts CSV export.
    #[arg(long = "scripts", value_name = "PATH", default_value = DEFAULT_SCRIPTS_CSV)]
    pub scripts: PathBuf,

    /// Skip validation of the characters CSV.
    #[arg(long = "skip-characters")]
    pub skip_characters: bool,

    /// Skip validation of the scripts CSV.
    #[arg(long = "skip-scripts")]
    pub skip_scripts: bool,

    /// Treat warnings as errors (exit code 1 when warnings exist).
    #[arg(long = "strict-warnings")]
    pub strict_warnings: bool,

    /// Treat control characters in CSV values as errors.
    #[arg(long = "fail-on-control-chars")]
    pub fail_on_control_chars: bool,

    /// Treat header normalization (BOM/control-char cleanup) as errors.
    #[arg(long = "fail-on-header-normalization")]
    pub fail_on_header_normalization: bool,

    /// Enable every strictness toggle at once.
    ///
    /// Equivalent to `--strict-warnings --fail-on-control-chars
    /// --fail-on-header-normalization`.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Report format written to stdout.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,
}

impl ValidateArgs {
    pub fn options(&self) -> ValidationOptions {
        ValidationOptions::from_flags(
            self.strict,
            self.strict_warnings,
            self.fail_on_control_chars,
            self.fail_on_header_normalization,
        )
    }
}

#[derive(Parser)]
pub struct SanitizeArgs {
    /// CSV file to sanitize. Repeat for multiple files.
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Only report detected control characters; never write files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip missing files instead of failing.
    #[arg(long = "ignore-missing")]
    pub ignore_missing: bool,

    /// Exit with code 1 when any control characters are found.
    #[arg(long = "fail-if-found")]
    pub fail_if_found: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Scripts CSV export to read.
    #[arg(long = "csv", value_name = "PATH", default_value = DEFAULT_SCRIPTS_CSV)]
    pub csv: PathBuf,

    /// Catalog file to write.
    #[arg(long = "out", value_name = "PATH", default_value = DEFAULT_SCRIPTS_JSON)]
    pub out: PathBuf,

    /// Previously published catalog to carry `background`/`official` from
    /// (default: the `--out` file).
    #[arg(long = "existing", value_name = "PATH")]
    pub existing: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// Validation report format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
}
