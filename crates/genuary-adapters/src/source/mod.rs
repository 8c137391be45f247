//! Template source adapters.
//!
//! Three ways to obtain the sketch template, selected by
//! [`select_source`] with first-match-wins precedence:
//!
//! 1. [`LocalDirSource`] — filtered copy of a directory on disk
//! 2. [`GitCloneSource`] — shallow clone of a remote repository via degit
//! 3. [`P5CreateSource`] — the stock `npm create p5js` scaffold

use std::path::Path;
use std::process::Command;

use genuary_core::application::ApplicationError;
use genuary_core::application::ports::TemplateSource;
use genuary_core::domain::TemplateSpec;
use genuary_core::error::GenuaryResult;

mod git;
mod local;
mod scaffold;

pub use git::GitCloneSource;
pub use local::LocalDirSource;
pub use scaffold::P5CreateSource;

/// Build the template source matching `spec`.
///
/// `spec` is assumed validated; when both a local directory and a repository
/// are set, the local directory wins.
pub fn select_source(spec: &TemplateSpec) -> Box<dyn TemplateSource> {
    if let Some(dir) = &spec.source_dir {
        Box::new(LocalDirSource::new(dir))
    } else if let Some(repo) = &spec.template_repo {
        Box::new(GitCloneSource::new(repo))
    } else {
        Box::new(P5CreateSource::new(spec.p5_version.clone()))
    }
}

/// Run an external acquisition command, mapping a missing binary and a
/// non-zero exit into [`ApplicationError::Acquisition`].
pub(crate) fn run_acquisition(
    command: &mut Command,
    source_desc: &str,
    working_dir: Option<&Path>,
) -> GenuaryResult<()> {
    if let Some(dir) = working_dir {
        command.current_dir(dir);
    }

    let output = command.output().map_err(|e| ApplicationError::Acquisition {
        source_desc: source_desc.to_owned(),
        reason: format!(
            "could not start {}: {e}",
            command.get_program().to_string_lossy()
        ),
    })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    let reason = if stderr.is_empty() {
        format!("command exited with {}", output.status)
    } else {
        format!("command exited with {}: {stderr}", output.status)
    };

    Err(ApplicationError::Acquisition {
        source_desc: source_desc.to_owned(),
        reason,
    }
    .into())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
