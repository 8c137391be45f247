//! Fan-out provisioning: one destination directory per sketch target.
//!
//! Targets are processed strictly in order, one at a time. The destination
//! existence check happens *before* the template is requested, so a fully
//! pre-populated output root never acquires a template at all. The resolver's
//! transient resources are released exactly once after the loop, on both the
//! success and failure paths.

use std::path::Path;

use tracing::{debug, instrument};

use crate::application::error::ApplicationError;
use crate::application::ports::Filesystem;
use crate::application::resolver::TemplateResolver;
use crate::domain::{PromptRecord, SketchTarget};
use crate::error::GenuaryResult;

/// Per-target outcome. `skipped` means the destination already existed and
/// was left untouched (idempotent re-run semantics).
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisioningResult {
    pub name: String,
    pub prompt: PromptRecord,
    pub skipped: bool,
}

/// Provision every target under `destinations_root`, reusing the resolved
/// template without repeated acquisition.
///
/// - Results preserve input order 1:1 and are returned only on full success.
/// - `on_progress(name, index, total)` fires for every target (1-based,
///   including skipped ones) before any copy attempt.
/// - A copy or acquisition failure aborts the run with an error naming the
///   failing target; already-provisioned directories stay on disk, so a
///   re-run resumes via the skip rule.
/// - `resolver.cleanup()` runs unconditionally once the loop ends.
#[instrument(skip_all, fields(root = %destinations_root.display(), targets = targets.len()))]
pub fn provision_all(
    filesystem: &dyn Filesystem,
    resolver: &mut TemplateResolver<'_>,
    destinations_root: &Path,
    targets: &[SketchTarget],
    on_progress: &mut dyn FnMut(&str, usize, usize),
) -> GenuaryResult<Vec<ProvisioningResult>> {
    let outcome = fan_out(filesystem, resolver, destinations_root, targets, on_progress);

    // Guaranteed-release scope: cleanup fires before either error can
    // propagate, and the provisioning error takes precedence.
    let cleanup = resolver.cleanup();
    let results = outcome?;
    cleanup?;
    Ok(results)
}

fn fan_out(
    filesystem: &dyn Filesystem,
    resolver: &mut TemplateResolver<'_>,
    destinations_root: &Path,
    targets: &[SketchTarget],
    on_progress: &mut dyn FnMut(&str, usize, usize),
) -> GenuaryResult<Vec<ProvisioningResult>> {
    let total = targets.len();
    let mut results = Vec::with_capacity(total);

    for (index, target) in targets.iter().enumerate() {
        let destination = destinations_root.join(&target.folder_name);
        on_progress(&target.folder_name, index + 1, total);

        // Existence check before requesting the template: skipped targets
        // must not trigger acquisition.
        if filesystem.exists(&destination) {
            debug!(sketch = %target.folder_name, "Destination exists, skipping");
            results.push(ProvisioningResult {
                name: target.folder_name.clone(),
                prompt: target.prompt.clone(),
                skipped: true,
            });
            continue;
        }

        // Both failure modes surface as "failed to generate sketch <name>":
        // whichever target triggered acquisition owns the acquisition error.
        let template = resolver
            .ensure_template()
            .map_err(|err| ApplicationError::CopyFailed {
                target: target.folder_name.clone(),
                reason: err.to_string(),
            })?;
        filesystem
            .copy_tree(template, &destination)
            .map_err(|err| ApplicationError::CopyFailed {
                target: target.folder_name.clone(),
                reason: err.to_string(),
            })?;

        results.push(ProvisioningResult {
            name: target.folder_name.clone(),
            prompt: target.prompt.clone(),
            skipped: false,
        });
    }

    Ok(results)
}
