//! Genuary Core
//!
//! Domain and application layers for the `genuary` scaffolding tool: given a
//! validated set of 31 daily prompts, provision one sketch directory per
//! prompt from a lazily acquired template.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          genuary-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService → provision_all →     │
//! │   TemplateResolver)                     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, TemplateSource,           │
//! │   PromptSource)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    genuary-adapters (Infrastructure)    │
//! │  (LocalFilesystem, degit/npm sources,   │
//! │   HttpPromptSource)                     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (PromptSet, SketchTarget, naming,      │
//! │   TemplateSpec)                         │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The template is acquired **at most once** per run, no matter how many of
//! the 31 destinations need it, and the transient holding area is removed
//! **exactly once** at the end of the run, on both the success and failure
//! paths. See [`application::TemplateResolver`] and
//! [`application::provision_all`].

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Manifest / README rendering
pub mod render;

// Root error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ProvisioningResult, ScaffoldOutcome, ScaffoldService, TemplateResolver, provision_all,
        ports::{Filesystem, PromptSource, TemplateSource},
    };
    pub use crate::domain::{
        P5Version, PromptRecord, PromptSet, SketchTarget, TemplateSpec,
        naming::{sanitize, sketch_folder_name, template_copy_filter},
    };
    pub use crate::error::{GenuaryError, GenuaryResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of daily prompts in a Genuary run. Fixed by the event format.
pub const PROMPT_COUNT: usize = 31;
