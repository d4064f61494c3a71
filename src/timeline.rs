// third-party imports
use tracematch::{Event, Trace};

// local imports
use crate::error::{Error, Result};

// ---

/// A playback cursor over a trace.
///
/// The cursor always points at an existing event, so moving it never panics;
/// requests that would leave the trace are rejected instead.
///
/// The command line only plays forward or seeks to a single step. The remaining
/// controls ([`Timeline::backward`], [`Timeline::to_end`], [`Timeline::position`])
/// are part of the library interface for interactive front ends.
pub struct Timeline<'a> {
    trace: &'a Trace,
    cursor: usize,
}

impl<'a> Timeline<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace, cursor: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn trace(&self) -> &'a Trace {
        self.trace
    }

    pub fn current(&self) -> &'a Event {
        &self.trace.events()[self.cursor]
    }

    /// Moves the cursor to the given step.
    pub fn seek(&mut self, step: usize) -> Result<&'a Event> {
        if step >= self.len() {
            return Err(Error::StepOutOfRange { step, len: self.len() });
        }
        self.cursor = step;
        Ok(self.current())
    }

    /// Moves one step forward, or returns `None` if already at the last step.
    pub fn forward(&mut self) -> Option<&'a Event> {
        if self.at_end() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Moves one step back, or returns `None` if already at the first step.
    pub fn backward(&mut self) -> Option<&'a Event> {
        self.cursor = self.cursor.checked_sub(1)?;
        Some(self.current())
    }

    pub fn rewind(&mut self) -> &'a Event {
        self.cursor = 0;
        self.current()
    }

    pub fn to_end(&mut self) -> &'a Event {
        self.cursor = self.len() - 1;
        self.current()
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.cursor + 1 >= self.len()
    }

    /// Returns the current step and the index of the last step.
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.len() - 1)
    }
}

#[cfg(test)]
mod tests;
