//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `genuary-adapters` implement
//! these.
//!
//! - `Filesystem`: directory creation, filtered tree copy, scratch dirs
//! - `TemplateSource`: the black box that materializes a template into a
//!   destination directory (local copy, repository clone, or the default
//!   `npm create p5js` scaffold)
//! - `PromptSource`: remote prompt retrieval

use std::path::{Path, PathBuf};

use crate::domain::PromptSet;
use crate::error::GenuaryResult;

/// Port for filesystem operations.
///
/// Implemented by `genuary_adapters::filesystem::LocalFilesystem`.
/// Copy operations apply the basename filter from
/// [`crate::domain::naming::template_copy_filter`], pruning dependency
/// caches and VCS metadata.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GenuaryResult<()>;

    /// Write string content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> GenuaryResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents. Removing a path that does not
    /// exist is not an error.
    fn remove_dir_all(&self, path: &Path) -> GenuaryResult<()>;

    /// Recursively copy `src` into `dest` (created if missing), skipping
    /// entries rejected by the template copy filter.
    fn copy_tree(&self, src: &Path, dest: &Path) -> GenuaryResult<()>;

    /// Create a uniquely named transient directory under the process-global
    /// temporary root. The caller owns its removal.
    fn create_scratch_dir(&self, prefix: &str) -> GenuaryResult<PathBuf>;
}

/// Port for materializing a template into a destination directory.
///
/// Exactly one invocation per provisioning run (the resolver guarantees
/// this). On success the destination holds a usable directory tree; on
/// failure the resolver removes whatever was partially created.
pub trait TemplateSource {
    /// Fill `dest` with the template content.
    fn materialize(&self, dest: &Path) -> GenuaryResult<()>;

    /// Short human-readable description for logs and error messages,
    /// e.g. `local directory ./my-template` or `npm create p5js@latest`.
    fn describe(&self) -> String;
}

/// Port for retrieving the year's prompts.
///
/// Implemented by `genuary_adapters::prompts::HttpPromptSource`.
pub trait PromptSource {
    /// Fetch and validate the prompt set for `year` (`None` = the feed's
    /// current year).
    fn fetch(&self, year: Option<u16>) -> GenuaryResult<PromptSet>;
}
