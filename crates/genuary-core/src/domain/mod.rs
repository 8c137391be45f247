//! Domain layer: pure logic, no I/O.
//!
//! Everything here is constructible and testable without touching the
//! filesystem, the network, or external processes.

pub mod error;
pub mod naming;
pub mod prompt;
pub mod target;
pub mod template_spec;

pub use error::DomainError;
pub use naming::{IGNORED_TEMPLATE_DIRS, sanitize, sketch_folder_name, template_copy_filter};
pub use prompt::{OneOrMany, PromptRecord, PromptSet};
pub use target::SketchTarget;
pub use template_spec::{P5Version, TemplateSpec};
