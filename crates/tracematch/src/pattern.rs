use std::fmt;

/// A pattern for the tracing matcher.
///
/// The pattern is kept as a sequence of characters and is interpreted one
/// [`Token`] at a time while matching, so every position the matcher reports
/// is an index into the original pattern string.
///
/// # Examples
///
/// ```
/// use tracematch::{Atom, Pattern, Quantifier};
///
/// let pattern = Pattern::new("a+.");
/// assert_eq!(pattern.len(), 3);
///
/// let token = pattern.token(0).unwrap();
/// assert_eq!(token.atom, Atom::Char('a'));
/// assert_eq!(token.quantifier, Some(Quantifier::Plus));
///
/// let token = pattern.token(2).unwrap();
/// assert_eq!(token.atom, Atom::Any);
/// assert_eq!(token.quantifier, None);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    chars: Vec<char>,
}

impl Pattern {
    /// Creates a new pattern from a string.
    ///
    /// This function is infallible; all input strings are valid patterns.
    /// A quantifier that does not follow another character is taken literally.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            chars: raw.as_ref().chars().collect(),
        }
    }

    /// Returns the number of characters in the pattern.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the token starting at the given position, or `None` at the end of the pattern.
    ///
    /// A character immediately followed by `*` or `+` forms a quantified token
    /// two characters wide; anything else forms a single character token.
    pub fn token(&self, pos: usize) -> Option<Token> {
        let &ch = self.chars.get(pos)?;
        let quantifier = self.chars.get(pos + 1).copied().and_then(Quantifier::from_char);

        Some(Token {
            ch,
            atom: Atom::from_char(ch),
            quantifier,
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

// ---

/// A single step of a pattern: one atom with an optional quantifier.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token {
    /// The character as written in the pattern.
    pub ch: char,
    pub atom: Atom,
    pub quantifier: Option<Quantifier>,
}

impl Token {
    /// Returns the number of pattern characters the token occupies.
    #[inline]
    pub fn width(&self) -> usize {
        if self.quantifier.is_some() { 2 } else { 1 }
    }
}

// ---

/// What a single pattern character accepts.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Atom {
    /// The `.` wildcard, accepts any character.
    Any,
    Char(char),
}

impl Atom {
    fn from_char(ch: char) -> Self {
        match ch {
            '.' => Self::Any,
            _ => Self::Char(ch),
        }
    }

    #[inline]
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Self::Any => true,
            Self::Char(expected) => expected == ch,
        }
    }
}

// ---

/// Repetition applied to the preceding atom.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Quantifier {
    /// `*`, zero or more.
    Star,
    /// `+`, one or more.
    Plus,
}

impl Quantifier {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '*' => Some(Self::Star),
            '+' => Some(Self::Plus),
            _ => None,
        }
    }

    /// Returns the minimal number of repetitions.
    #[inline]
    pub fn min(self) -> usize {
        match self {
            Self::Star => 0,
            Self::Plus => 1,
        }
    }
}
