// third-party imports
use derive_more::Deref;
use serde::{Deserialize, Serialize};

// local imports
use crate::event::{Event, Kind};

// ---

/// The complete, ordered record of one run.
///
/// A trace is never empty and always ends with exactly one terminal event:
/// either a [`Kind::Finish`] event or, when the step budget was exhausted,
/// the halted [`Kind::Fail`] marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Deref)]
pub struct Trace {
    #[deref]
    events: Vec<Event>,
    halted: bool,
}

impl Trace {
    pub(crate) fn new(events: Vec<Event>, halted: bool) -> Self {
        Self { events, halted }
    }

    /// Returns all events in emission order.
    #[inline]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns `true` if the run was cut short by the step budget.
    #[inline]
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Returns `true` if the run found a match within the step budget.
    pub fn is_match(&self) -> bool {
        matches!(self.outcome(), Outcome::Match { .. })
    }

    /// Derives the result of the run from its events.
    ///
    /// The span of a match starts at the offset of the last search attempt
    /// and ends where the end of the pattern was reached.
    pub fn outcome(&self) -> Outcome {
        if self.halted {
            return Outcome::Halted;
        }

        let Some(pos) = self.events.iter().position(|e| e.kind == Kind::Success) else {
            return Outcome::NoMatch;
        };

        let start = self.events[..pos]
            .iter()
            .rev()
            .find(|e| e.kind == Kind::Start && e.depth == 0 && e.pattern_pos == 0)
            .map(|e| e.text_pos)
            .unwrap_or_default();

        Outcome::Match {
            start,
            end: self.events[pos].text_pos,
        }
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

// ---

/// Result of a run, derived from its trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "result")]
pub enum Outcome {
    /// The pattern matched the text in `start..end` (character positions).
    Match { start: usize, end: usize },
    /// Every start offset was tried without success.
    NoMatch,
    /// The step budget ran out before the search completed.
    Halted,
}

#[cfg(test)]
mod tests;
