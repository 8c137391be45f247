//! Sketch targets: one directory-to-be-created per prompt.

use crate::domain::naming::sketch_folder_name;
use crate::domain::prompt::{PromptRecord, PromptSet};

/// A single sketch directory to be provisioned, derived from one prompt.
///
/// Folder names are unique across a run because prompt identities are unique
/// (enforced by [`PromptSet`]) and the day prefix disambiguates everything
/// else.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchTarget {
    /// 1-based day index.
    pub day: u8,
    /// Deterministic, filesystem-safe directory name, e.g. `01_shiny_things`.
    pub folder_name: String,
    /// The prompt this target was derived from.
    pub prompt: PromptRecord,
}

impl SketchTarget {
    /// Derive the ordered target list for a prompt set.
    pub fn from_prompt_set(set: &PromptSet) -> Vec<Self> {
        set.prompts()
            .iter()
            .enumerate()
            .map(|(index, prompt)| Self {
                day: (index + 1) as u8,
                folder_name: sketch_folder_name(index, prompt),
                prompt: prompt.clone(),
            })
            .collect()
    }
}
