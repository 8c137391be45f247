//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use genuary_core::application::ports::Filesystem;
use genuary_core::domain::template_copy_filter;
use genuary_core::error::GenuaryResult;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GenuaryResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GenuaryResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> GenuaryResult<()> {
        match std::fs::remove_dir_all(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error(path, e, "remove directory")),
        }
    }

    fn copy_tree(&self, src: &Path, dest: &Path) -> GenuaryResult<()> {
        copy_filtered(src, dest)
    }

    fn create_scratch_dir(&self, prefix: &str) -> GenuaryResult<PathBuf> {
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .map_err(|e| map_io_error(Path::new(prefix), e, "create temporary directory"))?;
        // Removal is owned by the caller, not by this handle's Drop.
        Ok(dir.keep())
    }
}

/// Recursively copy `src` into `dest`, pruning entries rejected by the
/// template copy filter. Shared by the filesystem port and the local
/// directory template source.
pub(crate) fn copy_filtered(src: &Path, dest: &Path) -> GenuaryResult<()> {
    std::fs::create_dir_all(dest).map_err(|e| map_io_error(dest, e, "create directory"))?;

    let walker = WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| template_copy_filter(entry.path()));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            map_io_error(&path, e.into(), "walk directory")
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| map_error(entry.path(), format!("Failed to relativize: {e}")))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)
                .map_err(|e| map_io_error(&target, e, "create directory"))?;
        } else {
            std::fs::copy(entry.path(), &target)
                .map_err(|e| map_io_error(&target, e, "copy file"))?;
        }
    }

    Ok(())
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> genuary_core::error::GenuaryError {
    map_error(path, format!("Failed to {operation}: {e}"))
}

fn map_error(path: &Path, reason: String) -> genuary_core::error::GenuaryError {
    use genuary_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
