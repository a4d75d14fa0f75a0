//! Host configuration from flags with environment fallbacks.

use clap::Parser;
use notebook_core::default_log_level;

pub const LOG_DIR_ENV: &str = "NOTEBOOK_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "NOTEBOOK_LOG_LEVEL";

/// Flags win over environment values; blank values count as unset.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "notebook_cli", version, about = "JSON-lines notebook store host")]
pub struct HostConfig {
    /// Absolute directory for log files; file logging stays off when unset
    #[arg(long, env = LOG_DIR_ENV, value_name = "ABS_PATH")]
    log_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = LOG_LEVEL_ENV, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl HostConfig {
    pub fn log_dir(&self) -> Option<&str> {
        non_blank(self.log_dir.as_deref())
    }

    pub fn log_level(&self) -> &str {
        non_blank(self.log_level.as_deref()).unwrap_or(default_log_level())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
