//! Implementation of the `genuary new` command.
//!
//! Responsibility: translate CLI arguments into a `TemplateSpec`, fetch the
//! prompts, call the core scaffold service, and display results.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, instrument};

use genuary_adapters::{GitCloneSource, HttpPromptSource, LocalFilesystem, select_source};
use genuary_core::{
    application::{ScaffoldService, ports::PromptSource},
    domain::{P5Version, TemplateSpec},
    render,
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `genuary new` command.
///
/// Dispatch sequence:
/// 1. Validate the year and the template configuration
/// 2. Fetch and validate the prompts
/// 3. Resolve the project folder (default `genuary-<year>`)
/// 4. Refuse an existing folder unless `--resume`
/// 5. Scaffold via `ScaffoldService`
/// 6. Print the summary and next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate inputs before any network or filesystem work.
    let year = args.year.as_deref().map(parse_year).transpose()?;
    let spec = build_template_spec(&args, &config)?;
    let projects_dir = args
        .projects_dir
        .clone()
        .unwrap_or_else(|| config.defaults.projects_dir.clone());

    // 2. Fetch prompts. This also pins down the year when none was given.
    output.info("Fetching prompts from genuary.art...")?;
    let prompt_source = HttpPromptSource::with_base_url(&config.feeds.prompts_url);
    let prompt_set = prompt_source.fetch(year)?;

    debug!(
        year = prompt_set.year(),
        source = %select_source(&spec).describe(),
        "Inputs resolved"
    );

    // 3. Resolve the project folder.
    let folder = args
        .folder
        .clone()
        .unwrap_or_else(|| format!("genuary-{}", prompt_set.year()));
    let (project_name, project_path) = resolve_project_path(&folder)?;
    validate_project_name(&project_name)?;

    // 4. Existing folders are only entered with --resume.
    if project_path.exists() && !args.resume {
        return Err(CliError::ProjectExists { path: project_path });
    }

    // 5. Scaffold.
    let filesystem = LocalFilesystem::new();
    let mut service = ScaffoldService::new(&filesystem);
    if let Some(gallery) = gallery_source(&args, &config) {
        service = service.with_gallery(gallery);
    }

    output.header(&format!(
        "Creating '{project_name}' for Genuary {}...",
        prompt_set.year()
    ))?;
    info!(project = %project_name, path = %project_path.display(), "Scaffold started");

    // A live bar on interactive terminals, plain `[i/N]` lines otherwise.
    let bar = progress_bar(&output);
    let outcome = service.scaffold(
        &project_path,
        &prompt_set,
        select_source(&spec),
        &projects_dir,
        &mut |name, index, total| match &bar {
            Some(bar) => {
                bar.set_length(total as u64);
                bar.set_message(name.to_owned());
                bar.set_position(index as u64);
            }
            None => {
                let _ = output.step(index, total, name);
            }
        },
    );
    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }
    let outcome = outcome?;

    if !outcome.gallery_installed && !args.no_gallery {
        output.warning("Gallery template unavailable, continuing without it")?;
    }

    // 6. Summary + next steps. Machine mode gets a single JSON document.
    if output.is_machine() {
        let summary = run_summary_json(&project_name, &project_path, prompt_set.year(), &outcome);
        let json = serde_json::to_string_pretty(&summary).map_err(|e| {
            CliError::Core(genuary_core::error::GenuaryError::Internal {
                message: format!("could not serialize run summary: {e}"),
            })
        })?;
        output.machine(&json)?;
        return Ok(());
    }

    output.success(&format!(
        "Project '{project_name}' ready: {}",
        render::summarize_results(&outcome.results)
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {project_name}"))?;
        output.print(&format!("  # Sketches live in {projects_dir}/"))?;
        output.print("  # Serve the gallery: npx serve .")?;
    }

    Ok(())
}

// ── Input validation ──────────────────────────────────────────────────────────

/// Accept only four-digit years.
pub fn parse_year(value: &str) -> CliResult<u16> {
    let valid = value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit());
    if !valid {
        return Err(CliError::InvalidYear {
            value: value.into(),
        });
    }
    value.parse().map_err(|_| CliError::InvalidYear {
        value: value.into(),
    })
}

fn build_template_spec(args: &NewArgs, config: &AppConfig) -> CliResult<TemplateSpec> {
    let p5_version = match args
        .p5_version
        .as_deref()
        .or(config.defaults.p5_version.as_deref())
    {
        Some(raw) => P5Version::from_str(raw).map_err(|e| CliError::Core(e.into()))?,
        None => P5Version::Latest,
    };

    let spec = TemplateSpec {
        source_dir: args.source_dir.clone(),
        template_repo: args
            .template_repo
            .clone()
            .or_else(|| config.defaults.template_repo.clone()),
        p5_version,
    };
    // clap already rejects --source-dir with --template-repo; this also
    // catches a config-file repo colliding with --source-dir.
    spec.validate().map_err(|e| CliError::Core(e.into()))?;
    Ok(spec)
}

fn run_summary_json(
    project_name: &str,
    project_path: &Path,
    year: u16,
    outcome: &genuary_core::application::ScaffoldOutcome,
) -> serde_json::Value {
    let skipped = outcome.results.iter().filter(|r| r.skipped).count();
    serde_json::json!({
        "project": project_name,
        "path": project_path.display().to_string(),
        "year": year,
        "created": outcome.results.len() - skipped,
        "skipped": skipped,
        "gallery_installed": outcome.gallery_installed,
        "sketches": outcome
            .results
            .iter()
            .map(|r| serde_json::json!({ "name": r.name, "skipped": r.skipped }))
            .collect::<Vec<_>>(),
    })
}

fn progress_bar(output: &OutputManager) -> Option<ProgressBar> {
    if output.is_quiet() || output.format() != OutputFormat::Human {
        return None;
    }
    let style = ProgressStyle::with_template("{bar:24} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    Some(ProgressBar::new(genuary_core::PROMPT_COUNT as u64).with_style(style))
}

fn gallery_source(
    args: &NewArgs,
    config: &AppConfig,
) -> Option<Box<dyn genuary_core::application::ports::TemplateSource>> {
    if args.no_gallery || config.feeds.gallery_repo.is_empty() {
        return None;
    }
    Some(Box::new(GitCloneSource::new(&config.feeds.gallery_repo)))
}

// ── Path resolution ───────────────────────────────────────────────────────────

pub fn resolve_project_path(folder: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(folder);

    let project_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidProjectName {
            name: folder.into(),
            reason: "cannot extract a valid folder name".into(),
        })?
        .to_string();

    Ok((project_name, path.to_path_buf()))
}

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_year ────────────────────────────────────────────────────────

    #[test]
    fn four_digit_years_parse() {
        assert_eq!(parse_year("2026").unwrap(), 2026);
        assert_eq!(parse_year("2021").unwrap(), 2021);
    }

    #[test]
    fn short_and_garbled_years_are_rejected() {
        for bad in ["26", "20266", "twenty", "20a6", ""] {
            assert!(
                matches!(parse_year(bad), Err(CliError::InvalidYear { .. })),
                "accepted: {bad}"
            );
        }
    }

    // ── resolve_project_path ──────────────────────────────────────────────

    #[test]
    fn simple_name_is_its_own_path() {
        let (name, path) = resolve_project_path("genuary-2026").unwrap();
        assert_eq!(name, "genuary-2026");
        assert_eq!(path, PathBuf::from("genuary-2026"));
    }

    #[test]
    fn relative_path_splits_leaf() {
        let (name, path) = resolve_project_path("../my-genuary").unwrap();
        assert_eq!(name, "my-genuary");
        assert_eq!(path, PathBuf::from("../my-genuary"));
    }

    // ── validate_project_name ─────────────────────────────────────────────

    #[test]
    fn dotfile_name_is_invalid() {
        assert!(matches!(
            validate_project_name(".hidden"),
            Err(CliError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn valid_names_pass() {
        for name in &["genuary-2026", "my_genuary", "Sketchbook"] {
            assert!(validate_project_name(name).is_ok(), "failed for: {name}");
        }
    }

    // ── build_template_spec ───────────────────────────────────────────────

    fn bare_args() -> NewArgs {
        NewArgs {
            folder: None,
            year: None,
            p5_version: None,
            template_repo: None,
            source_dir: None,
            projects_dir: None,
            resume: false,
            no_gallery: false,
        }
    }

    #[test]
    fn defaults_to_latest_p5() {
        let spec = build_template_spec(&bare_args(), &AppConfig::default()).unwrap();
        assert!(spec.p5_version.is_latest());
        assert!(spec.source_dir.is_none());
        assert!(spec.template_repo.is_none());
    }

    #[test]
    fn config_repo_is_used_when_flag_absent() {
        let mut config = AppConfig::default();
        config.defaults.template_repo = Some("user/repo".into());
        let spec = build_template_spec(&bare_args(), &config).unwrap();
        assert_eq!(spec.template_repo.as_deref(), Some("user/repo"));
    }

    #[test]
    fn source_dir_conflicts_with_config_repo() {
        let mut config = AppConfig::default();
        config.defaults.template_repo = Some("user/repo".into());
        let mut args = bare_args();
        args.source_dir = Some(PathBuf::from("./tpl"));
        assert!(build_template_spec(&args, &config).is_err());
    }

    #[test]
    fn bad_p5_version_is_rejected() {
        let mut args = bare_args();
        args.p5_version = Some("1.11".into());
        assert!(build_template_spec(&args, &AppConfig::default()).is_err());
    }

    // ── run_summary_json ──────────────────────────────────────────────────

    #[test]
    fn json_summary_counts_created_and_skipped() {
        use genuary_core::application::{ProvisioningResult, ScaffoldOutcome};
        use genuary_core::domain::PromptRecord;

        let result = |name: &str, skipped: bool| ProvisioningResult {
            name: name.into(),
            prompt: PromptRecord::default(),
            skipped,
        };
        let outcome = ScaffoldOutcome {
            results: vec![
                result("01_shiny_things", false),
                result("02_sketch", true),
                result("03_sketch", false),
            ],
            gallery_installed: true,
        };

        let summary =
            run_summary_json("genuary-2026", Path::new("genuary-2026"), 2026, &outcome);
        assert_eq!(summary["project"], "genuary-2026");
        assert_eq!(summary["year"], 2026);
        assert_eq!(summary["created"], 2);
        assert_eq!(summary["skipped"], 1);
        assert_eq!(summary["gallery_installed"], true);
        assert_eq!(summary["sketches"][1]["name"], "02_sketch");
        assert_eq!(summary["sketches"][1]["skipped"], true);
    }

    // ── gallery_source ────────────────────────────────────────────────────

    #[test]
    fn no_gallery_flag_disables_the_source() {
        let mut args = bare_args();
        args.no_gallery = true;
        assert!(gallery_source(&args, &AppConfig::default()).is_none());
    }

    #[test]
    fn empty_gallery_repo_disables_the_source() {
        let mut config = AppConfig::default();
        config.feeds.gallery_repo = String::new();
        assert!(gallery_source(&bare_args(), &config).is_none());
    }
}
