//! Implementation of the `genuary prompts` command.

use tracing::instrument;

use genuary_adapters::HttpPromptSource;
use genuary_core::application::ports::PromptSource;
use genuary_core::domain::{PromptRecord, PromptSet};

use crate::{
    cli::PromptsArgs,
    commands::new::parse_year,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `genuary prompts` command: fetch a year's prompts and print
/// them without touching the filesystem.
#[instrument(skip_all)]
pub fn execute(args: PromptsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let year = args.year.as_deref().map(parse_year).transpose()?;

    let source = HttpPromptSource::with_base_url(&config.feeds.prompts_url);
    let prompt_set = source.fetch(year)?;

    // `--json` and the global `--output-format json` both select JSON.
    if args.json || output.is_machine() {
        let json =
            serde_json::to_string_pretty(prompt_set.prompts()).map_err(|e| CliError::Core(
                genuary_core::error::GenuaryError::Internal {
                    message: format!("could not serialize prompts: {e}"),
                },
            ))?;
        output.machine(&json)?;
        return Ok(());
    }

    print_table(&prompt_set, &output)
}

fn print_table(set: &PromptSet, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("Genuary {}", set.year()))?;
    output.print("")?;

    for (index, prompt) in set.prompts().iter().enumerate() {
        output.print(&format!("  {:>2}  {}", index + 1, prompt_line(prompt)))?;
    }

    Ok(())
}

/// One display line per prompt: identity, then credit when present.
fn prompt_line(prompt: &PromptRecord) -> String {
    let identity = prompt.identity().unwrap_or("(untitled)");
    match credit_of(prompt) {
        Some(credit) => format!("{identity} (credit: {credit})"),
        None => identity.to_owned(),
    }
}

fn credit_of(prompt: &PromptRecord) -> Option<String> {
    use genuary_core::domain::OneOrMany;
    match prompt.credit.as_ref()? {
        OneOrMany::One(name) => Some(name.clone()),
        OneOrMany::Many(names) => Some(names.join(", ")),
    }
}
