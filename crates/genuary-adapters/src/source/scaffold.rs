//! Default template source: the stock p5.js project scaffold.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use tracing::info;

use genuary_core::application::ApplicationError;
use genuary_core::application::ports::TemplateSource;
use genuary_core::domain::P5Version;
use genuary_core::error::GenuaryResult;

/// Runs `npm create p5js@latest` into the destination directory.
///
/// The initializer is invoked from the destination's parent with the bare
/// directory name, since it refuses to scaffold into absolute paths.
#[derive(Debug, Clone)]
pub struct P5CreateSource {
    version: P5Version,
}

impl P5CreateSource {
    pub fn new(version: P5Version) -> Self {
        Self { version }
    }

    fn command(&self, dir_name: &OsStr) -> Command {
        let mut cmd = Command::new("npm");
        cmd.arg("create").arg("p5js@latest").arg(dir_name).arg("--");
        if let P5Version::Pinned(version) = &self.version {
            cmd.arg("--version").arg(version);
        }
        cmd.arg("--silent").arg("--type").arg("basic");
        cmd
    }
}

impl TemplateSource for P5CreateSource {
    fn materialize(&self, dest: &Path) -> GenuaryResult<()> {
        let (parent, dir_name) = match (dest.parent(), dest.file_name()) {
            (Some(parent), Some(name)) => (parent, name),
            _ => {
                return Err(ApplicationError::Acquisition {
                    source_desc: self.describe(),
                    reason: format!("cannot scaffold into {}", dest.display()),
                }
                .into());
            }
        };

        info!(version = %self.version, "Scaffolding p5.js template");
        crate::source::run_acquisition(
            &mut self.command(dir_name),
            &self.describe(),
            Some(parent),
        )
    }

    fn describe(&self) -> String {
        if self.version.is_latest() {
            "npm create p5js@latest".into()
        } else {
            format!("npm create p5js@latest (p5 {})", self.version)
        }
    }
}
