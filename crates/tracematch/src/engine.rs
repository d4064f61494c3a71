// third-party imports
use serde::{Deserialize, Serialize};

// local imports
use crate::event::{Kind, Recorder};
use crate::pattern::{Pattern, Quantifier, Token};
use crate::trace::Trace;

// ---

/// Default upper bound on the number of events emitted by one run.
pub const DEFAULT_MAX_STEPS: usize = 2000;

/// Generates a trace using the default step budget.
///
/// # Examples
///
/// ```
/// use tracematch::{Kind, generate_trace};
///
/// let trace = generate_trace("abc", "abc");
/// let success = trace.iter().find(|e| e.kind == Kind::Success).unwrap();
/// assert_eq!(success.text_pos, 3);
/// assert!(trace.is_match());
/// ```
pub fn generate_trace(pattern: &str, text: &str) -> Trace {
    Engine::default().run(pattern, text)
}

// ---

/// Engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Options {
    /// Upper bound on emitted events before the run is forcibly halted.
    pub max_steps: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

// ---

/// Trace-producing matcher.
///
/// The engine holds no state between runs, so a single instance can serve any
/// number of runs, including concurrent ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct Engine {
    options: Options,
}

impl Engine {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Searches the text for the first start offset at which the pattern matches,
    /// recording every decision on the way.
    pub fn run(&self, pattern: &str, text: &str) -> Trace {
        let pattern = Pattern::new(pattern);
        let text: Vec<char> = text.chars().collect();
        log::debug!(
            "run pattern of {} chars against text of {} chars with budget of {} steps",
            pattern.len(),
            text.len(),
            self.options.max_steps,
        );

        let matcher = Matcher {
            pattern: &pattern,
            text: &text,
        };
        let mut rec = Recorder::new(self.options.max_steps);
        let mut matched = false;

        for start in 0..=text.len() {
            if rec.exhausted() {
                break;
            }

            rec.emit(
                Kind::Start,
                0,
                start,
                0,
                format!("Attempting match starting at index {start}..."),
            );

            if matcher.attempt(&mut rec, 0, start, 0) {
                matched = true;
                break;
            }
        }

        let trace = rec.finish(matched, text.len());
        log::debug!("run completed with {} events: {:?}", trace.len(), trace.outcome());
        trace
    }
}

// ---

struct Matcher<'a> {
    pattern: &'a Pattern,
    text: &'a [char],
}

impl Matcher<'_> {
    fn attempt(&self, rec: &mut Recorder, pp: usize, tp: usize, depth: usize) -> bool {
        if rec.exhausted() {
            return false;
        }

        let Some(token) = self.pattern.token(pp) else {
            rec.emit(Kind::Success, pp, tp, depth, format!("Match found ending at index {tp}!"));
            return true;
        };

        rec.emit(Kind::Start, pp, tp, depth, format!("Trying to match '{}'", token.ch));

        if let Some(quantifier) = token.quantifier {
            return self.repeat(rec, token, quantifier, pp, tp, depth);
        }

        match self.text.get(tp) {
            Some(&ch) if token.atom.accepts(ch) => {
                rec.emit(Kind::Match, pp, tp, depth, format!("Matched '{ch}'"));
                if self.attempt(rec, pp + 1, tp + 1, depth + 1) {
                    return true;
                }
                rec.emit(Kind::Backtrack, pp, tp, depth, "Backtracking single char");
                false
            }
            _ => {
                rec.emit(Kind::Fail, pp, tp, depth, "Mismatch");
                false
            }
        }
    }

    fn repeat(
        &self,
        rec: &mut Recorder,
        token: Token,
        quantifier: Quantifier,
        pp: usize,
        tp: usize,
        depth: usize,
    ) -> bool {
        let available = self.text[tp..]
            .iter()
            .take_while(|&&ch| token.atom.accepts(ch))
            .count();

        let min = quantifier.min();
        if available < min {
            rec.emit(
                Kind::Fail,
                pp,
                tp,
                depth,
                format!("'+' requires at least one '{}'", token.ch),
            );
            return false;
        }

        let next = pp + token.width();
        for n in (min..=available).rev() {
            rec.emit(
                Kind::Match,
                pp,
                tp + n,
                depth,
                format!("Quantifier consumed {n} chars. Recursing..."),
            );
            if self.attempt(rec, next, tp + n, depth + 1) {
                return true;
            }
            rec.emit(Kind::Backtrack, pp, tp + n, depth, format!("Backtracking from {n} consumption"));
        }

        false
    }
}
