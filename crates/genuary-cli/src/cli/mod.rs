//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "genuary",
    bin_name = "genuary",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{2728} A month of daily sketches from genuary.art prompts",
    long_about = "Genuary scaffolds one p5.js sketch directory per January \
                  prompt, plus a browsable gallery, a prompts.json manifest, \
                  and a README.",
    after_help = "EXAMPLES:\n\
        \x20 genuary new\n\
        \x20 genuary new my-genuary --year 2025\n\
        \x20 genuary new --source-dir ./my-template\n\
        \x20 genuary prompts --year 2024\n\
        \x20 genuary completions bash > /usr/share/bash-completion/completions/genuary",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a full genuary project.
    #[command(
        visible_alias = "n",
        about = "Create a genuary project with one sketch per prompt",
        after_help = "EXAMPLES:\n\
            \x20 genuary new\n\
            \x20 genuary new my-genuary --year 2025 --p5-version 1.11.3\n\
            \x20 genuary new --template-repo someone/p5-template\n\
            \x20 genuary new --source-dir ./my-template --resume"
    )]
    New(NewArgs),

    /// Show the year's prompts without creating anything.
    #[command(
        visible_alias = "p",
        about = "List the prompts for a year",
        after_help = "EXAMPLES:\n\
            \x20 genuary prompts\n\
            \x20 genuary prompts --year 2023\n\
            \x20 genuary prompts --json"
    )]
    Prompts(PromptsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 genuary completions bash > ~/.local/share/bash-completion/completions/genuary\n\
            \x20 genuary completions zsh  > ~/.zfunc/_genuary\n\
            \x20 genuary completions fish > ~/.config/fish/completions/genuary.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `genuary new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project folder.  A plain name creates `./name`; a path like `../foo`
    /// places the project one level up.  Defaults to `genuary-<year>`.
    #[arg(value_name = "FOLDER", help = "Project folder (default: genuary-<year>)")]
    pub folder: Option<String>,

    /// Which year's prompts to fetch.
    #[arg(
        short = 'y',
        long = "year",
        value_name = "YEAR",
        help = "Prompt year (default: the current year's feed)"
    )]
    pub year: Option<String>,

    /// p5.js version for the default template.
    #[arg(
        long = "p5-version",
        value_name = "VERSION",
        help = "p5.js version for the default template (e.g. 1.11.3, latest)"
    )]
    pub p5_version: Option<String>,

    /// Template repository to clone instead of the default scaffold.
    #[arg(
        short = 't',
        long = "template-repo",
        value_name = "REPO",
        help = "Repository to use as the sketch template (degit syntax)"
    )]
    pub template_repo: Option<String>,

    /// Local directory to copy as the sketch template.
    #[arg(
        short = 's',
        long = "source-dir",
        value_name = "DIR",
        conflicts_with = "template_repo",
        help = "Local directory to use as the sketch template"
    )]
    pub source_dir: Option<PathBuf>,

    /// Name of the sketches container inside the project.
    #[arg(
        long = "projects-dir",
        value_name = "NAME",
        help = "Sketches directory name inside the project (default: sketches)"
    )]
    pub projects_dir: Option<String>,

    /// Continue into an existing project folder, skipping finished sketches.
    #[arg(
        long = "resume",
        help = "Fill in missing sketches in an existing project folder"
    )]
    pub resume: bool,

    /// Skip the gallery template.
    #[arg(long = "no-gallery", help = "Skip the gallery template download")]
    pub no_gallery: bool,
}

// ── prompts ───────────────────────────────────────────────────────────────────

/// Arguments for `genuary prompts`.
#[derive(Debug, Args)]
pub struct PromptsArgs {
    /// Which year's prompts to fetch.
    #[arg(short = 'y', long = "year", value_name = "YEAR", help = "Prompt year")]
    pub year: Option<String>,

    /// Emit the raw prompt list as JSON.
    #[arg(long = "json", help = "Print prompts as JSON")]
    pub json: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `genuary completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
