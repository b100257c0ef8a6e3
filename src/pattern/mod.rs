mod core;
mod error;
mod token;

pub use self::error::{CreateUrlError, InvalidPatternError, NoMatchError};

use regex::Regex;

/// A compiled URL path template.
///
/// Built once from a pattern string such as `/alfa/{param}/tango*`, then
/// immutable: matching, extraction and generation are pure functions of the
/// pattern and the input, so a single instance can be shared across threads
/// without locking.
#[derive(Debug)]
pub struct PathPattern {
    pattern: Box<str>,
    regex: Option<Regex>,
    parameter_index: Vec<Box<str>>,
    segments: Vec<String>,
    has_parameters: bool,
    has_wildcards: bool,
}

impl PathPattern {
    /// The original pattern text, verbatim.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// True if the pattern contains at least one `{name}` placeholder.
    pub fn has_parameters(&self) -> bool {
        self.has_parameters
    }

    /// True if the pattern contains at least one `*`.
    pub fn has_wildcards(&self) -> bool {
        self.has_wildcards
    }

    /// One entry per capture group, in declaration order: the parameter name
    /// for a `{name}` placeholder, the empty string for a wildcard.
    pub fn parameter_index(&self) -> impl Iterator<Item = &str> + '_ {
        self.parameter_index.iter().map(|name| &**name)
    }

    /// The literal fragments obtained by splitting the pattern at each
    /// `{name}` placeholder. Wildcards do not split: a `*` stays inside its
    /// fragment. A pattern without placeholders has a single segment equal
    /// to the whole pattern.
    ///
    /// Callers use these to build faster lookup structures over literal
    /// prefixes.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The compiled matcher. `None` for purely literal patterns, which match
    /// by string equality instead.
    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl std::str::FromStr for PathPattern {
    type Err = InvalidPatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
