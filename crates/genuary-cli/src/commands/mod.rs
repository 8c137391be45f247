//! Command handlers.
//!
//! Each submodule implements one subcommand: translate parsed arguments into
//! core types, call the services, and render results. No business logic
//! lives here.

pub mod completions;
pub mod new;
pub mod prompts;
