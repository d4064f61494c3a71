// std imports
use std::fmt::{self, Write};

// third-party imports
use owo_colors::{OwoColorize, Style};
use serde::Serialize;
use tracematch::{Event, Kind, Outcome, Trace};
use unicode_width::UnicodeWidthStr;

// local imports
use crate::preview::Preview;

// ---

/// Renders trace events and run summaries as human readable text.
pub struct Renderer {
    colors: bool,
    indent: String,
}

impl Renderer {
    pub fn new(colors: bool, indent: impl Into<String>) -> Self {
        Self {
            colors,
            indent: indent.into(),
        }
    }

    /// Formats a single event as one line, indented by its recursion depth.
    pub fn event_line(&self, event: &Event) -> String {
        format!(
            "{id} {indent}{kind} [p={pp}, t={tp}] {message}",
            id = self.paint(format!("{:>5}", event.id), Style::new().dimmed()),
            indent = self.indent.repeat(event.depth),
            kind = self.paint(format!("{:<9}", event.kind.as_ref()), kind_style(event.kind)),
            pp = event.pattern_pos,
            tp = event.text_pos,
            message = event.message,
        )
    }

    /// Formats the state of the run at the given event, marking the current
    /// pattern and text positions with a caret.
    pub fn snapshot(&self, pattern: &str, text: &str, event: &Event, progress: (usize, usize)) -> String {
        let mut out = String::new();
        let (step, last) = progress;
        let style = kind_style(event.kind);

        writeln!(out, "step {step} / {last}: {}", self.paint(event.kind, style)).ok();
        writeln!(out, "  pattern: {pattern}").ok();
        writeln!(out, "           {}", self.caret(pattern, event.pattern_pos, style)).ok();
        writeln!(out, "  text:    {text}").ok();
        writeln!(out, "           {}", self.caret(text, event.text_pos, style)).ok();
        writeln!(out, "  {}", event.message).ok();
        out
    }

    /// Formats the final verdict of the run.
    pub fn summary(&self, trace: &Trace, text: &str, preview: &Preview) -> String {
        let mut out = String::new();
        let steps = trace.len();

        match trace.outcome() {
            Outcome::Match { start, end } => {
                let matched: String = text.chars().skip(start).take(end - start).collect();
                writeln!(
                    out,
                    "{} at {start}..{end} in {steps} steps: {:?}",
                    self.paint("match found", Style::new().green().bold()),
                    matched,
                )
                .ok();
                let preview = match preview {
                    Preview::Matched(value) => format!("regex preview: {value:?}"),
                    Preview::NoMatch => "regex preview: no match".to_owned(),
                    Preview::Unsupported(reason) => format!("regex preview unavailable: {reason}"),
                };
                writeln!(out, "  {preview}").ok();
            }
            Outcome::NoMatch => {
                writeln!(
                    out,
                    "{} in {steps} steps",
                    self.paint("no match found", Style::new().red().bold())
                )
                .ok();
            }
            Outcome::Halted => {
                writeln!(
                    out,
                    "{}: execution halted after {} steps",
                    self.paint("catastrophic backtracking detected", Style::new().yellow().bold()),
                    steps.saturating_sub(1),
                )
                .ok();
            }
        }

        out
    }

    fn caret(&self, s: &str, pos: usize, style: Style) -> String {
        let column = match s.char_indices().nth(pos) {
            Some((offset, _)) => s[..offset].width(),
            None => s.width(),
        };
        format!("{}{}", " ".repeat(column), self.paint('^', style))
    }

    fn paint<T: fmt::Display>(&self, value: T, style: Style) -> String {
        if self.colors {
            value.style(style).to_string()
        } else {
            value.to_string()
        }
    }
}

fn kind_style(kind: Kind) -> Style {
    match kind {
        Kind::Start => Style::new().blue(),
        Kind::Match => Style::new().green(),
        Kind::Success => Style::new().green().bold(),
        Kind::Fail => Style::new().red(),
        Kind::Backtrack => Style::new().yellow(),
        Kind::Finish => Style::new().bold(),
    }
}

// ---

/// Machine readable report of a run.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Report<'a> {
    pub pattern: &'a str,
    pub text: &'a str,
    pub max_steps: usize,
    pub outcome: Outcome,
    pub halted: bool,
    pub preview: &'a Preview,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<&'a [Event]>,
}

/// Machine readable state of a run at a single step.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StepReport<'a> {
    pub step: usize,
    pub last: usize,
    pub event: &'a Event,
}
