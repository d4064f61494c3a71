// third-party imports
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

// local imports
use crate::trace::Trace;

// ---

/// Kind of decision recorded by a trace event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    /// An attempt begins, either at a new start offset or at a pattern position.
    Start,
    /// Text was tentatively consumed.
    Match,
    /// An attempt failed; also used for the halted marker.
    Fail,
    /// A tentative consumption was undone.
    Backtrack,
    /// The end of the pattern was reached.
    Success,
    /// The run completed without exhausting the budget.
    Finish,
}

// ---

/// One decision of the matcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Event {
    pub id: usize,
    pub kind: Kind,
    pub pattern_pos: usize,
    pub text_pos: usize,
    pub depth: usize,
    pub message: String,
}

// ---

/// Append-only event log of a single run.
///
/// The recorder also owns the step budget. [`Recorder::exhausted`] is the one
/// cooperative cancellation check of the engine.
pub(crate) struct Recorder {
    events: Vec<Event>,
    limit: usize,
}

impl Recorder {
    pub fn new(limit: usize) -> Self {
        Self {
            events: Vec::with_capacity(limit.min(INITIAL_CAPACITY) + 1),
            limit,
        }
    }

    #[inline]
    pub fn exhausted(&self) -> bool {
        self.events.len() >= self.limit
    }

    /// Appends an event unless the budget is already exhausted.
    pub fn emit(&mut self, kind: Kind, pattern_pos: usize, text_pos: usize, depth: usize, message: impl Into<String>) {
        if self.exhausted() {
            return;
        }
        self.push(kind, pattern_pos, text_pos, depth, message.into());
    }

    /// Closes the log with exactly one terminal event and returns the trace.
    pub fn finish(mut self, matched: bool, text_len: usize) -> Trace {
        let halted = self.exhausted();
        if halted {
            log::warn!("step budget of {} events exhausted", self.limit);
            self.push(Kind::Fail, 0, 0, 0, HALTED.into());
        } else if matched {
            self.push(Kind::Finish, 0, 0, 0, "Execution completed.".into());
        } else {
            self.push(Kind::Finish, 0, text_len, 0, "No match found in entire string.".into());
        }

        Trace::new(self.events, halted)
    }

    fn push(&mut self, kind: Kind, pattern_pos: usize, text_pos: usize, depth: usize, message: String) {
        self.events.push(Event {
            id: self.events.len(),
            kind,
            pattern_pos,
            text_pos,
            depth,
            message,
        });
    }
}

const HALTED: &str = "Catastrophic backtracking detected! Execution halted.";
const INITIAL_CAPACITY: usize = 256;
