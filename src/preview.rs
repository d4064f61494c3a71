//! Matched text lookup for display purposes.
//!
//! The lookup uses the `regex` crate, which understands a superset of the
//! tracing matcher's syntax. It only decorates the output and never affects
//! the trace or the reported outcome.

// third-party imports
use regex::Regex;
use serde::Serialize;

// ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "status", content = "value")]
pub enum Preview {
    Matched(String),
    NoMatch,
    /// The pattern is not accepted by the regular expression engine.
    Unsupported(String),
}

pub fn matched_text(pattern: &str, text: &str) -> Preview {
    match Regex::new(pattern) {
        Ok(re) => match re.find(text) {
            Some(m) => Preview::Matched(m.as_str().to_owned()),
            None => Preview::NoMatch,
        },
        Err(err) => {
            log::debug!("pattern {pattern:?} cannot be previewed: {err}");
            Preview::Unsupported(err.to_string())
        }
    }
}
