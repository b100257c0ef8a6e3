/// Pattern text rejected at compile time.
///
/// Always fatal to that pattern's registration; the text must be fixed, not
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum InvalidPatternError {
    #[error("'{pattern}' must start with '/'")]
    MissingLeadingSlash { pattern: String },

    /// Catches the legacy `:name` parameter syntax early.
    #[error("variables have {{var}} format, path cannot have ':': {fragment}")]
    ColonInPattern { fragment: String },

    #[error("unterminated '{{' placeholder in '{pattern}'")]
    UnterminatedPlaceholder { pattern: String },

    #[error("empty '{{}}' placeholder in '{pattern}'")]
    EmptyPlaceholder { pattern: String },

    #[error("invalid parameter name '{name}' in '{pattern}'")]
    InvalidParameterName { name: String, pattern: String },
}

/// Parameter extraction was attempted against a URL the pattern rejects.
///
/// Recoverable: a routing table typically moves on to the next candidate.
#[derive(Debug, thiserror::Error)]
#[error("URL '{url}' does not match path '{pattern}'")]
pub struct NoMatchError {
    pub(super) url: String,
    pub(super) pattern: String,
}

/// URL synthesis could not be performed deterministically.
///
/// Both variants are programming errors at the call site.
#[derive(Debug, thiserror::Error)]
pub enum CreateUrlError {
    /// There is no value to substitute for a `*`, so wildcarded patterns can
    /// never generate URLs.
    #[error("path '{pattern}' with wildcards can not create urls")]
    Wildcard { pattern: String },

    #[error("missing value for parameter '{name}' of '{pattern}'")]
    MissingParameter { name: String, pattern: String },
}
