// std imports
use std::io::{self, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

// ---

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to serialize output: {0}")]
    Json(#[from] json::Error),
    #[error("step {step} is out of range, the trace has {len} steps")]
    StepOutOfRange { step: usize, len: usize },
}

impl Error {
    /// Writes the error and optional tips to stderr.
    pub fn log(&self) {
        self.log_to(&mut io::stderr()).ok();
    }

    pub fn log_to<W: Write>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)?;
        if let Some(tip) = self.tip() {
            writeln!(target, "{} {}", "  tip:".green().bold(), tip)?;
        }
        Ok(())
    }

    fn tip(&self) -> Option<String> {
        match self {
            Self::StepOutOfRange { len, .. } if *len > 0 => {
                Some(format!("use a step between {} and {}", 0.bold(), (len - 1).bold()))
            }
            _ => None,
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
