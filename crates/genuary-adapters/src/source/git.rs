//! Template source backed by a remote repository clone.

use std::path::Path;
use std::process::Command;

use tracing::info;

use genuary_core::application::ports::TemplateSource;
use genuary_core::error::GenuaryResult;

use crate::source::run_acquisition;

/// Clones a repository without history via `npx degit`.
///
/// `repo` is anything degit accepts: `user/repo`, `user/repo#branch`,
/// `user/repo/subdirectory`, or a full URL.
#[derive(Debug, Clone)]
pub struct GitCloneSource {
    repo: String,
}

impl GitCloneSource {
    pub fn new(repo: impl Into<String>) -> Self {
        Self { repo: repo.into() }
    }

    fn command(&self, dest: &Path) -> Command {
        let mut cmd = Command::new("npx");
        cmd.arg("degit@latest").arg(&self.repo).arg(dest);
        cmd
    }
}

impl TemplateSource for GitCloneSource {
    fn materialize(&self, dest: &Path) -> GenuaryResult<()> {
        info!(repo = %self.repo, "Cloning template repository");
        run_acquisition(&mut self.command(dest), &self.describe(), None)
    }

    fn describe(&self) -> String {
        format!("repository {}", self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_command_targets_repo_and_destination() {
        let source = GitCloneSource::new("sableRaf/genuary-gallery-templates/templates/default");
        let cmd = source.command(Path::new("/tmp/project"));

        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec![
                "degit@latest",
                "sableRaf/genuary-gallery-templates/templates/default",
                "/tmp/project",
            ]
        );
    }
}
