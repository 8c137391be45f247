//! Lazy, single-acquisition template resolution.
//!
//! The resolver wraps a [`TemplateSource`] behind a deferred, memoizing
//! accessor. The lifecycle is an explicit state machine rather than a
//! nullable cached value:
//!
//! ```text
//! Unresolved ──ensure_template()──▶ Resolving ──ok──▶ Resolved(path)
//!     ▲                                │
//!     └────────── acquisition failed ──┘   (partial scratch dir removed)
//!
//! any state ──cleanup()──▶ Disposed (terminal)
//! ```
//!
//! Invariant: at-most-one-resolve, exactly-one-dispose. Repeated
//! `ensure_template` calls after a successful acquisition return the cached
//! path without touching the source again; `cleanup` is idempotent and a
//! no-op when nothing was ever acquired.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::application::error::ApplicationError;
use crate::application::ports::{Filesystem, TemplateSource};
use crate::error::{GenuaryError, GenuaryResult};

const SCRATCH_PREFIX: &str = "genuary-template-";
const TEMPLATE_DIR_NAME: &str = "p5-template";

/// Lifecycle of the template holding area.
#[derive(Debug)]
enum TemplateState {
    /// No acquisition attempted yet.
    Unresolved,
    /// Acquisition in flight.
    Resolving,
    /// Template materialized and reusable.
    Resolved(TemplateHandle),
    /// Cleaned up. Terminal.
    Disposed,
}

/// A resolved, filesystem-resident copy of the template.
#[derive(Debug)]
struct TemplateHandle {
    /// Transient holding area owned by this resolver; removed on cleanup.
    scratch_root: PathBuf,
    /// The template tree inside `scratch_root`, handed out read-only.
    template_dir: PathBuf,
}

/// Deferred, memoizing accessor to a materialized template directory.
///
/// Owned exclusively for the duration of one provisioning run. Sequential
/// reuse only; this type is deliberately not shareable across threads.
pub struct TemplateResolver<'fs> {
    source: Box<dyn TemplateSource>,
    filesystem: &'fs dyn Filesystem,
    state: TemplateState,
}

impl<'fs> TemplateResolver<'fs> {
    pub fn new(source: Box<dyn TemplateSource>, filesystem: &'fs dyn Filesystem) -> Self {
        Self {
            source,
            filesystem,
            state: TemplateState::Unresolved,
        }
    }

    /// Path to the resolved template, acquiring it on the first call.
    ///
    /// The underlying source is invoked at most once per resolver. On
    /// acquisition failure the partially created transient directory is
    /// removed before the error propagates, and the resolver returns to
    /// `Unresolved`.
    pub fn ensure_template(&mut self) -> GenuaryResult<&Path> {
        match self.state {
            TemplateState::Resolved(_) => {}
            TemplateState::Disposed => {
                return Err(ApplicationError::ResolverDisposed.into());
            }
            TemplateState::Unresolved | TemplateState::Resolving => {
                match self.acquire() {
                    Ok(handle) => self.state = TemplateState::Resolved(handle),
                    Err(err) => {
                        self.state = TemplateState::Unresolved;
                        return Err(err);
                    }
                }
            }
        }

        match &self.state {
            TemplateState::Resolved(handle) => Ok(&handle.template_dir),
            _ => unreachable!("state set to Resolved above"),
        }
    }

    /// Whether a template has been acquired and not yet disposed.
    pub fn is_resolved(&self) -> bool {
        matches!(self.state, TemplateState::Resolved(_))
    }

    /// Remove the transient holding area, if one was created.
    ///
    /// Idempotent: safe to call multiple times and when no acquisition ever
    /// happened. The resolver is `Disposed` afterwards regardless of the
    /// removal outcome, so a failed removal cannot be retried into a double
    /// free.
    pub fn cleanup(&mut self) -> GenuaryResult<()> {
        match std::mem::replace(&mut self.state, TemplateState::Disposed) {
            TemplateState::Resolved(handle) => {
                debug!(path = %handle.scratch_root.display(), "Removing template holding area");
                self.filesystem.remove_dir_all(&handle.scratch_root)
            }
            _ => Ok(()),
        }
    }

    fn acquire(&mut self) -> GenuaryResult<TemplateHandle> {
        self.state = TemplateState::Resolving;

        let scratch_root = self.filesystem.create_scratch_dir(SCRATCH_PREFIX)?;
        let template_dir = scratch_root.join(TEMPLATE_DIR_NAME);

        info!(source = %self.source.describe(), "Acquiring sketch template");

        if let Err(err) = self.source.materialize(&template_dir) {
            // The transient area must not outlive a failed acquisition.
            if let Err(cleanup_err) = self.filesystem.remove_dir_all(&scratch_root) {
                warn!(
                    error = %cleanup_err,
                    path = %scratch_root.display(),
                    "Failed to remove holding area after failed acquisition"
                );
            }
            // Sources already report acquisition failures; wrap anything else.
            return Err(match err {
                GenuaryError::Application(app @ ApplicationError::Acquisition { .. }) => app.into(),
                other => ApplicationError::Acquisition {
                    source_desc: self.source.describe(),
                    reason: other.to_string(),
                }
                .into(),
            });
        }

        debug!(path = %template_dir.display(), "Template acquired");
        Ok(TemplateHandle {
            scratch_root,
            template_dir,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
