// Runtime configuration for the shell

use eyre::{Context, Result};
use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Settings resolved from the command line and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Style done rows and alerts with ANSI colours
    pub color: bool,
    /// Ask before removing a task
    pub confirm_removals: bool,
    /// Print a prompt before reading each line
    pub prompt: bool,
    /// Read commands from this file instead of stdin
    pub script: Option<PathBuf>,
    /// Number of `-v` flags given
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            confirm_removals: true,
            prompt: true,
            script: None,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Map command-line flags to a configuration
    ///
    /// Prompts are only shown when reading commands from an interactive
    /// stdin; a script file or a pipe gets none.
    pub fn from_flags(no_color: bool, yes: bool, script: Option<PathBuf>, verbose: u8, stdin_is_terminal: bool) -> Self {
        Self {
            color: !no_color,
            confirm_removals: !yes,
            prompt: script.is_none() && stdin_is_terminal,
            script,
            verbosity: verbose,
        }
    }

    /// Honour the NO_COLOR convention (https://no-color.org)
    pub fn apply_env(self) -> Self {
        self.apply_no_color(std::env::var_os("NO_COLOR"))
    }

    /// Disable colour when a non-empty NO_COLOR value is given
    pub fn apply_no_color(mut self, no_color: Option<OsString>) -> Self {
        if no_color.is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }
        self
    }

    /// Open the script file, if one is configured
    pub fn open_script(&self) -> Result<Option<BufReader<File>>> {
        match &self.script {
            Some(path) => {
                let file = File::open(path).with_context(|| format!("Failed to open script {}", path.display()))?;
                Ok(Some(BufReader::new(file)))
            }
            None => Ok(None),
        }
    }

    /// Default tracing filter when RUST_LOG is unset
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Plain configuration for non-interactive use (no colour, no prompt)
    pub fn plain() -> Self {
        Self {
            color: false,
            prompt: false,
            ..Self::default()
        }
    }
}
