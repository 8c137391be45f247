//! Filesystem adapters.

mod local;

pub use local::LocalFilesystem;
pub(crate) use local::copy_filtered;
