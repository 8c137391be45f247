//! Infrastructure adapters for genuary.
//!
//! This crate implements the ports defined in
//! `genuary_core::application::ports`. It contains all external dependencies
//! and I/O: the real filesystem, the template sources (local directory,
//! repository clone, `npm create p5js` scaffold), and the genuary.art
//! prompt feed.

pub mod filesystem;
pub mod prompts;
pub mod source;

// Re-export commonly used adapters
pub use filesystem::LocalFilesystem;
pub use prompts::HttpPromptSource;
pub use source::{GitCloneSource, LocalDirSource, P5CreateSource, select_source};
