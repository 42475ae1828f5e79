//! Application configuration. Output defaults for the CLI.

use crate::domain::OutputFormat;
use serde::Deserialize;
use tracing::warn;

/// Format used when the CLI is not given `--format`.
pub const DEFAULT_FORMAT: OutputFormat = OutputFormat::Korean;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Default output format (json, markdown, text, korean). Read from MEETING_SUMMARY_DEFAULT_FORMAT.
    #[serde(default)]
    pub default_format: Option<String>,

    /// Print the statistics block to stderr after a CLI run. Read from MEETING_SUMMARY_PRINT_STATS.
    #[serde(default)]
    pub print_stats: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("MEETING_SUMMARY").try_parsing(true));
        if let Ok(path) = std::env::var("MEETING_SUMMARY_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the configured default format. Falls back to Korean if unset or invalid.
    pub fn default_format_or_default(&self) -> OutputFormat {
        match self.default_format.as_deref().map(str::parse::<OutputFormat>) {
            Some(Ok(format)) => format,
            Some(Err(e)) => {
                warn!(error = %e, "ignoring configured default_format");
                DEFAULT_FORMAT
            }
            None => DEFAULT_FORMAT,
        }
    }

    /// Returns whether to print statistics. Defaults to true.
    pub fn print_stats_or_default(&self) -> bool {
        self.print_stats.unwrap_or(true)
    }
}
