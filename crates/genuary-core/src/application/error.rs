//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The external template source could not be materialized (process
    /// exited non-zero, clone failed, local path missing). Any transient
    /// storage has already been removed by the time this propagates.
    #[error("failed to acquire template from {source_desc}: {reason}")]
    Acquisition { source_desc: String, reason: String },

    /// A specific sketch directory could not be populated, either because
    /// the copy failed or because template acquisition failed while this
    /// target needed it. Fatal to the run; earlier sketches stay on disk.
    #[error("failed to generate sketch {target}: {reason}")]
    CopyFailed { target: String, reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// genuary.art has no prompts for the requested year. `year` is `None`
    /// when the default (current-year) feed was asked for, so the message
    /// never asserts a year the user did not name.
    #[error("{}", prompts_unavailable_message(.year))]
    PromptsUnavailable { year: Option<u16> },

    /// The prompts feed could not be fetched or decoded.
    #[error("failed to fetch prompts: {reason}")]
    PromptFetch { reason: String },

    /// `ensure_template` was called on a resolver that was already
    /// disposed. Always a bug in the calling code.
    #[error("template resolver used after cleanup")]
    ResolverDisposed,
}

fn prompts_unavailable_message(year: &Option<u16>) -> String {
    match year {
        Some(year) => format!("prompts for {year} not found. The year may not be available yet"),
        None => "prompts not found. They may not be published yet".to_owned(),
    }
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Acquisition { source_desc, .. } => vec![
                format!("The template source failed: {source_desc}"),
                "Local directory: check the path exists and is readable".into(),
                "Repository / default scaffold: ensure npm and npx are installed and on PATH".into(),
            ],
            Self::CopyFailed { target, .. } => vec![
                format!("Sketch '{target}' could not be created"),
                "Already-created sketches are kept; re-running skips them".into(),
                "Check write permissions and free disk space".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::PromptsUnavailable { year } => vec![
                match year {
                    Some(year) => format!("No prompts published for {year} yet"),
                    None => "No prompts published for the upcoming Genuary yet".into(),
                },
                "Try an earlier year: genuary new --year 2025".into(),
                "Check https://genuary.art".into(),
            ],
            Self::PromptFetch { .. } => vec![
                "Unable to reach genuary.art".into(),
                "Check your internet connection and try again".into(),
            ],
            Self::ResolverDisposed => vec![
                "This is a bug in genuary, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display/exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PromptsUnavailable { .. } => ErrorCategory::NotFound,
            Self::Acquisition { .. }
            | Self::CopyFailed { .. }
            | Self::Filesystem { .. }
            | Self::PromptFetch { .. }
            | Self::ResolverDisposed => ErrorCategory::Internal,
        }
    }
}
