//! Template source backed by a directory on disk.

use std::path::{Path, PathBuf};

use tracing::info;

use genuary_core::application::ApplicationError;
use genuary_core::application::ports::TemplateSource;
use genuary_core::error::GenuaryResult;

use crate::filesystem::copy_filtered;

/// Copies a user-provided directory, skipping dependency caches and VCS
/// metadata.
#[derive(Debug, Clone)]
pub struct LocalDirSource {
    dir: PathBuf,
}

impl LocalDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateSource for LocalDirSource {
    fn materialize(&self, dest: &Path) -> GenuaryResult<()> {
        if !self.dir.is_dir() {
            return Err(ApplicationError::Acquisition {
                source_desc: self.describe(),
                reason: format!("{} is not a readable directory", self.dir.display()),
            }
            .into());
        }

        info!(from = %self.dir.display(), "Copying local template");
        copy_filtered(&self.dir, dest)
    }

    fn describe(&self) -> String {
        format!("local directory {}", self.dir.display())
    }
}
