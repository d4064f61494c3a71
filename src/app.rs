// std imports
use std::io::Write;
use std::thread;
use std::time::Duration;

// third-party imports
use serde::Serialize;
use tracematch::Engine;

// local imports
use crate::{
    error::Result,
    preview::matched_text,
    render::{Renderer, Report, StepReport},
    timeline::Timeline,
};

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print every event followed by the summary.
    Full,
    /// Print the summary only.
    Summary,
    /// Print the state of the run at a single step.
    Step(usize),
    /// Print events one by one with a delay in between.
    Play { interval: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub struct Options {
    pub engine: tracematch::Options,
    pub mode: Mode,
    pub format: OutputFormat,
    pub colors: bool,
    pub indent: String,
}

// ---

pub struct App {
    engine: Engine,
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self {
            engine: Engine::new(options.engine),
            options,
        }
    }

    pub fn run(&self, pattern: &str, text: &str, output: &mut dyn Write) -> Result<()> {
        let trace = self.engine.run(pattern, text);
        let preview = matched_text(pattern, text);
        let renderer = Renderer::new(self.options.colors, self.options.indent.clone());
        let mut timeline = Timeline::new(&trace);

        let summary = Report {
            pattern,
            text,
            max_steps: self.options.engine.max_steps,
            outcome: trace.outcome(),
            halted: trace.halted(),
            preview: &preview,
            events: None,
        };

        match (self.options.mode, self.options.format) {
            (Mode::Step(step), OutputFormat::Json) => {
                let event = timeline.seek(step)?;
                let (step, last) = timeline.progress();
                write_json(output, &StepReport { step, last, event })?;
            }
            (Mode::Summary, OutputFormat::Json) => {
                write_json(output, &summary)?;
            }
            (_, OutputFormat::Json) => {
                let report = Report {
                    events: Some(trace.events()),
                    ..summary
                };
                write_json(output, &report)?;
            }
            (Mode::Full, OutputFormat::Human) => {
                for event in &trace {
                    writeln!(output, "{}", renderer.event_line(event))?;
                }
                write!(output, "{}", renderer.summary(&trace, text, &preview))?;
            }
            (Mode::Summary, OutputFormat::Human) => {
                write!(output, "{}", renderer.summary(&trace, text, &preview))?;
            }
            (Mode::Step(step), OutputFormat::Human) => {
                let event = timeline.seek(step)?;
                write!(output, "{}", renderer.snapshot(pattern, text, event, timeline.progress()))?;
                if timeline.at_end() {
                    write!(output, "{}", renderer.summary(&trace, text, &preview))?;
                }
            }
            (Mode::Play { interval }, OutputFormat::Human) => {
                log::debug!("play {} events with interval {:?}", timeline.len(), interval);
                let mut event = timeline.rewind();
                loop {
                    writeln!(output, "{}", renderer.event_line(event))?;
                    output.flush()?;
                    match timeline.forward() {
                        Some(next) => event = next,
                        None => break,
                    }
                    if !interval.is_zero() {
                        thread::sleep(interval);
                    }
                }
                write!(output, "{}", renderer.summary(&trace, text, &preview))?;
            }
        }

        Ok(())
    }
}

/// Serializes the value in full before writing it, so output failures are reported as I/O errors.
fn write_json<T: Serialize>(output: &mut dyn Write, value: &T) -> Result<()> {
    let mut buf = json::to_vec_pretty(value)?;
    buf.push(b'\n');
    output.write_all(&buf)?;
    Ok(())
}

#[cfg(test)]
mod tests;
