//! Application layer for genuary.
//!
//! This layer contains:
//! - **Services**: use case orchestration ([`ScaffoldService`])
//! - **Resolver / Provisioner**: the lazy single-acquisition template
//!   lifecycle and the fan-out copy loop
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod provisioner;
pub mod resolver;
pub mod scaffold_service;

pub use error::ApplicationError;
pub use ports::{Filesystem, PromptSource, TemplateSource};
pub use provisioner::{ProvisioningResult, provision_all};
pub use resolver::TemplateResolver;
pub use scaffold_service::{ScaffoldOutcome, ScaffoldService};
