// third-party imports
use clap::{Parser, ValueEnum};

// local imports
use crate::app;

// ---

/// Replays every decision of a backtracking pattern matcher, step by step.
///
/// Patterns support literal characters, '.' for any character, and the greedy
/// quantifiers '*' and '+' applied to the preceding character.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Pattern to search for.
    #[arg(name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: String,

    /// Text to search in.
    #[arg(name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    /// Maximum number of trace events before the run is halted, overrides the configured value.
    #[arg(long, short = 'm', env = "REWIND_MAX_STEPS", overrides_with = "max_steps")]
    pub max_steps: Option<usize>,

    /// Show the state of the run at the given step only.
    #[arg(long, short = 's', overrides_with = "step", conflicts_with_all = ["play", "summary_only"])]
    pub step: Option<usize>,

    /// Replay the trace event by event.
    #[arg(long, short = 'p', conflicts_with = "summary_only")]
    pub play: bool,

    /// Delay between events in play mode, in milliseconds, overrides the configured value.
    #[arg(long, env = "REWIND_INTERVAL_MS", overrides_with = "interval_ms")]
    pub interval_ms: Option<u64>,

    /// Show only the final verdict.
    #[arg(long, short = 'S')]
    pub summary_only: bool,

    /// Output format.
    #[arg(long, short = 'o', default_value = "human", overrides_with = "output_format")]
    #[arg(value_enum)]
    pub output_format: OutputFormat,

    /// Color output options.
    #[arg(long, default_value = "auto", env = "REWIND_COLOR", overrides_with = "color")]
    #[arg(value_enum)]
    pub color: ColorOption,

    /// Configuration file path, can be repeated; an empty value or '-' discards the default configuration file and any files specified before.
    #[arg(long, short = 'c', number_of_values = 1)]
    pub config: Vec<String>,
}

impl Opt {
    /// Returns the explicitly requested configuration files and whether the default file is discarded.
    pub fn config_files(&self) -> (&[String], bool) {
        match self.config.iter().rposition(|x| x.is_empty() || x == "-") {
            Some(pos) => (&self.config[pos + 1..], true),
            None => (&self.config, false),
        }
    }

    pub fn mode(&self, default_interval_ms: u64) -> app::Mode {
        if let Some(step) = self.step {
            app::Mode::Step(step)
        } else if self.summary_only {
            app::Mode::Summary
        } else if self.play {
            app::Mode::Play {
                interval: std::time::Duration::from_millis(self.interval_ms.unwrap_or(default_interval_ms)),
            }
        } else {
            app::Mode::Full
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOption {
    Auto,
    Always,
    Never,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl From<OutputFormat> for app::OutputFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Human => Self::Human,
            OutputFormat::Json => Self::Json,
        }
    }
}
