//! A backtracking pattern matcher that explains itself.
//!
//! This crate matches a text against a deliberately small pattern language and
//! records every decision the matcher makes along the way. The resulting
//! [`Trace`] can be replayed step by step, forwards or backwards.
//!
//! # Pattern Syntax
//!
//! - `.` - Matches exactly one character
//! - `*` - Repeats the preceding character zero or more times (greedy)
//! - `+` - Repeats the preceding character one or more times (greedy)
//! - Any other character matches itself
//! - A `*` or `+` with nothing before it is treated as a literal character
//!
//! There are no character classes, groups, anchors or escapes, and there is
//! no such thing as an invalid pattern.
//!
//! # Search
//!
//! The search is unanchored: every start offset of the text is tried in
//! increasing order, including the empty suffix at the very end, and the first
//! offset that succeeds wins.
//!
//! # Step Budget
//!
//! Exhaustive backtracking can take an exponential number of steps. Every run
//! is bounded by [`Options::max_steps`]; when the budget runs out the trace is
//! closed with a halted marker and the run is reported as [`Outcome::Halted`].
//!
//! # Examples
//!
//! ```
//! use tracematch::{Kind, Outcome, generate_trace};
//!
//! let trace = generate_trace("a+b", "xaaab");
//! assert_eq!(trace.outcome(), Outcome::Match { start: 1, end: 5 });
//! assert_eq!(trace.last().map(|e| e.kind), Some(Kind::Finish));
//!
//! let trace = generate_trace("x", "");
//! assert_eq!(trace.outcome(), Outcome::NoMatch);
//! ```
//!
//! ```
//! use tracematch::{Engine, Options, Outcome};
//!
//! let engine = Engine::new(Options { max_steps: 100 });
//! let trace = engine.run("a*a*a*a*b", "aaaaaaaaaaaaaaaa");
//! assert_eq!(trace.outcome(), Outcome::Halted);
//! assert_eq!(trace.len(), 101);
//! ```

mod engine;
mod event;
mod pattern;
mod trace;

pub use engine::*;
pub use event::{Event, Kind};
pub use pattern::{Atom, Pattern, Quantifier, Token};
pub use trace::*;
