//! Domain errors: validation failures, never I/O.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (values only, no sources)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ── Prompt set validation ────────────────────────────────────────────
    #[error("expected {expected} prompts, got {actual}")]
    WrongPromptCount { expected: usize, actual: usize },

    #[error("invalid prompt at index {index}: missing name, date, or shorthand")]
    PromptMissingIdentity { index: usize },

    #[error("duplicate shorthand found: \"{shorthand}\"")]
    DuplicateShorthand { shorthand: String },

    #[error("invalid prompts format: missing \"{key}\" key")]
    MissingKey { key: &'static str },

    // ── Argument validation ──────────────────────────────────────────────
    #[error(
        "invalid p5.js version: {value}. Must be \"latest\" or a semantic version like \"1.11.1\""
    )]
    InvalidVersion { value: String },

    /// Both a local source directory and a remote template repository were
    /// configured. Raised before any acquisition work begins.
    #[error("cannot use a local source directory and a template repository together")]
    ConflictingTemplateSources,
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WrongPromptCount { expected, .. } => vec![
                format!("genuary.art publishes exactly {expected} prompts per year"),
                "The year may not be fully published yet; try an earlier year".into(),
            ],
            Self::PromptMissingIdentity { .. } | Self::DuplicateShorthand { .. } | Self::MissingKey { .. } => vec![
                "The prompts feed looks malformed".into(),
                "Check https://genuary.art or try again later".into(),
            ],
            Self::InvalidVersion { .. } => vec![
                "Use --p5-version latest".into(),
                "Or pin a release, e.g. --p5-version 1.11.1".into(),
            ],
            Self::ConflictingTemplateSources => vec![
                "Choose one template source:".into(),
                "  --source-dir <path>       copy a local directory".into(),
                "  --template-repo <u/repo>  clone a repository".into(),
                "  (neither)                 scaffold with npm create p5js".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WrongPromptCount { .. }
            | Self::PromptMissingIdentity { .. }
            | Self::DuplicateShorthand { .. }
            | Self::MissingKey { .. } => ErrorCategory::Validation,
            Self::InvalidVersion { .. } => ErrorCategory::Validation,
            Self::ConflictingTemplateSources => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for CLI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}
