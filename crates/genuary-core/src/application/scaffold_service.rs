//! Project assembler - main application orchestrator.
//!
//! Sequences one full scaffolding run:
//! 1. Ensure the project root exists
//! 2. Install the gallery template (best effort)
//! 3. Write the prompts manifest and README
//! 4. Fan out the sketch directories via the template resolver
//!
//! It owns no policy of its own; naming, validation, and the acquisition
//! lifecycle all live in the domain and in the resolver/provisioner.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::application::ports::{Filesystem, TemplateSource};
use crate::application::provisioner::{ProvisioningResult, provision_all};
use crate::application::resolver::TemplateResolver;
use crate::domain::{PromptSet, SketchTarget};
use crate::error::GenuaryResult;
use crate::render;

/// What a scaffolding run produced.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    /// Per-sketch results, in prompt order.
    pub results: Vec<ProvisioningResult>,
    /// Whether the gallery template was installed. A failed gallery clone is
    /// a warning, not a run failure.
    pub gallery_installed: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService<'fs> {
    filesystem: &'fs dyn Filesystem,
    gallery_source: Option<Box<dyn TemplateSource>>,
}

impl<'fs> ScaffoldService<'fs> {
    pub fn new(filesystem: &'fs dyn Filesystem) -> Self {
        Self {
            filesystem,
            gallery_source: None,
        }
    }

    /// Attach a gallery template source, cloned into the project root before
    /// the sketches are generated.
    pub fn with_gallery(mut self, source: Box<dyn TemplateSource>) -> Self {
        self.gallery_source = Some(source);
        self
    }

    /// Scaffold the entire project.
    ///
    /// `projects_dir` is the sketches container name (usually `sketches`);
    /// `on_progress` receives `(folder_name, index, total)` for every sketch.
    #[instrument(skip_all, fields(project = %project_path.display(), year = prompt_set.year()))]
    pub fn scaffold(
        &self,
        project_path: &Path,
        prompt_set: &PromptSet,
        sketch_source: Box<dyn TemplateSource>,
        projects_dir: &str,
        on_progress: &mut dyn FnMut(&str, usize, usize),
    ) -> GenuaryResult<ScaffoldOutcome> {
        self.filesystem.create_dir_all(project_path)?;

        let gallery_installed = self.install_gallery(project_path, projects_dir);

        // The sketches container must exist even when the gallery clone was
        // skipped or failed.
        let sketches_dir = project_path.join(projects_dir);
        self.filesystem.create_dir_all(&sketches_dir)?;

        let targets = SketchTarget::from_prompt_set(prompt_set);

        // Manifest replaces whatever the gallery template shipped.
        self.filesystem.write_file(
            &project_path.join("prompts.json"),
            &render::render_manifest(prompt_set, &targets),
        )?;
        self.filesystem.write_file(
            &project_path.join("README.md"),
            &render::render_readme(prompt_set, &targets),
        )?;

        let mut resolver = TemplateResolver::new(sketch_source, self.filesystem);
        let results = provision_all(
            self.filesystem,
            &mut resolver,
            &sketches_dir,
            &targets,
            on_progress,
        )?;

        info!(
            created = results.iter().filter(|r| !r.skipped).count(),
            skipped = results.iter().filter(|r| r.skipped).count(),
            "Scaffold completed"
        );

        Ok(ScaffoldOutcome {
            results,
            gallery_installed,
        })
    }

    /// Clone the gallery template into the project root. Failure is reported
    /// but never aborts the run; the example sketches directory shipped with
    /// the template is removed so the generated one takes its place.
    fn install_gallery(&self, project_path: &Path, projects_dir: &str) -> bool {
        let Some(gallery) = &self.gallery_source else {
            return false;
        };

        info!(source = %gallery.describe(), "Downloading gallery template");
        if let Err(err) = gallery.materialize(project_path) {
            warn!(error = %err, "Could not install gallery template, continuing without it");
            return false;
        }

        let example_sketches = project_path.join(projects_dir);
        if let Err(err) = self.filesystem.remove_dir_all(&example_sketches) {
            warn!(error = %err, "Could not remove example sketches from gallery template");
        }
        true
    }
}
