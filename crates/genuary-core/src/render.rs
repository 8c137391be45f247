//! Rendering of the generated metadata files: the `prompts.json` manifest
//! consumed by the gallery at runtime, and the project `README.md`.

use serde_json::{Value, json};

use crate::application::ProvisioningResult;
use crate::domain::{PromptSet, SketchTarget};

const README_TEMPLATE: &str = "\
# Genuary {{YEAR}}

One sketch per day for [Genuary {{YEAR}}](https://genuary.art), scaffolded
with `genuary`. Each day lives in its own directory under `sketches/`.

## Running

Open `index.html` in a browser, or serve the project locally:

```
npm run serve
```

## Prompts

{{PROMPTS_LIST}}
";

/// The `prompts.json` payload loaded by the gallery at runtime: every prompt
/// plus its 1-based `day` and derived `folderName`. Pretty-printed JSON with
/// a trailing newline.
pub fn render_manifest(set: &PromptSet, targets: &[SketchTarget]) -> String {
    let entries: Vec<Value> = targets
        .iter()
        .map(|target| {
            let mut entry = match serde_json::to_value(&target.prompt) {
                Ok(Value::Object(map)) => map,
                _ => serde_json::Map::new(),
            };
            entry.insert("day".into(), json!(target.day));
            entry.insert("folderName".into(), json!(target.folder_name));
            Value::Object(entry)
        })
        .collect();

    let payload = json!({
        "year": set.year(),
        "genuaryPrompts": entries,
    });

    let mut out = serde_json::to_string_pretty(&payload).expect("manifest payload is valid JSON");
    out.push('\n');
    out
}

/// README with the year and the numbered prompt list filled in.
pub fn render_readme(set: &PromptSet, targets: &[SketchTarget]) -> String {
    let prompts_list: Vec<String> = targets
        .iter()
        .map(|target| {
            let name = target
                .prompt
                .shorthand
                .as_deref()
                .or(target.prompt.name.as_deref())
                .map(str::to_owned)
                .unwrap_or_else(|| format!("Day {}", target.day));
            let description = target.prompt.description.as_deref().unwrap_or("");
            format!("{}. **{}** - {}", target.day, name, description)
        })
        .collect();

    README_TEMPLATE
        .replace("{{YEAR}}", &set.year().to_string())
        .replace("{{PROMPTS_LIST}}", &prompts_list.join("\n"))
}

/// One-line run summary for the CLI, e.g. `28 created, 3 skipped`.
pub fn summarize_results(results: &[ProvisioningResult]) -> String {
    let skipped = results.iter().filter(|r| r.skipped).count();
    let created = results.len() - skipped;
    format!("{created} created, {skipped} skipped")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PromptRecord, SketchTarget};

    fn set_with(first: PromptRecord, second: PromptRecord) -> PromptSet {
        let mut prompts = vec![first, second];
        prompts.extend((3..=31).map(|d| PromptRecord {
            shorthand: Some(format!("day {d}")),
            ..PromptRecord::default()
        }));
        PromptSet::new(2024, prompts).unwrap()
    }

    #[test]
    fn manifest_includes_day_and_folder_name() {
        let set = set_with(
            PromptRecord {
                name: Some("Particles, lots of them.".into()),
                shorthand: Some("Particles".into()),
                ..PromptRecord::default()
            },
            PromptRecord {
                name: Some("No palettes.".into()),
                description: Some("No palettes prompt.".into()),
                ..PromptRecord::default()
            },
        );
        let targets = SketchTarget::from_prompt_set(&set);
        let rendered = render_manifest(&set, &targets);
        let data: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(data["year"], 2024);
        let prompts = data["genuaryPrompts"].as_array().unwrap();
        assert_eq!(prompts.len(), 31);
        assert_eq!(prompts[0]["day"], 1);
        assert_eq!(prompts[0]["folderName"], "01_particles");
        assert_eq!(prompts[1]["day"], 2);
        assert_eq!(prompts[1]["folderName"], "02_no_palettes");
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn manifest_preserves_unknown_prompt_fields() {
        let mut first = PromptRecord {
            shorthand: Some("Particles".into()),
            ..PromptRecord::default()
        };
        first
            .extra
            .insert("difficulty".into(), Value::from("hard"));
        let set = set_with(
            first,
            PromptRecord {
                shorthand: Some("No palettes".into()),
                ..PromptRecord::default()
            },
        );
        let targets = SketchTarget::from_prompt_set(&set);
        let data: Value = serde_json::from_str(&render_manifest(&set, &targets)).unwrap();
        assert_eq!(data["genuaryPrompts"][0]["difficulty"], "hard");
    }

    #[test]
    fn readme_lists_prompts_with_descriptions() {
        let set = set_with(
            PromptRecord {
                shorthand: Some("Particles".into()),
                description: Some("Lots of them.".into()),
                ..PromptRecord::default()
            },
            PromptRecord {
                shorthand: Some("No palettes".into()),
                ..PromptRecord::default()
            },
        );
        let targets = SketchTarget::from_prompt_set(&set);
        let readme = render_readme(&set, &targets);

        assert!(readme.contains("# Genuary 2024"));
        assert!(readme.contains("1. **Particles** - Lots of them."));
        assert!(readme.contains("2. **No palettes** - "));
        assert!(!readme.contains("{{"));
    }

    #[test]
    fn summary_counts_created_and_skipped() {
        let results = vec![
            ProvisioningResult {
                name: "01_a".into(),
                prompt: PromptRecord::default(),
                skipped: false,
            },
            ProvisioningResult {
                name: "02_b".into(),
                prompt: PromptRecord::default(),
                skipped: true,
            },
        ];
        assert_eq!(summarize_results(&results), "1 created, 1 skipped");
    }
}
