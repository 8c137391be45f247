//! Value objects describing where the sketch template comes from.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Acquisition configuration for one run.
///
/// Precedence at acquisition time (first match wins):
/// 1. `source_dir` — recursive copy of a local directory
/// 2. `template_repo` — clone of a remote repository
/// 3. neither — the default `npm create p5js` scaffold with `p5_version`
///
/// Setting both `source_dir` and `template_repo` is a hard validation error,
/// raised by [`TemplateSpec::validate`] before any work begins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateSpec {
    pub source_dir: Option<PathBuf>,
    pub template_repo: Option<String>,
    pub p5_version: P5Version,
}

impl TemplateSpec {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.source_dir.is_some() && self.template_repo.is_some() {
            return Err(DomainError::ConflictingTemplateSources);
        }
        Ok(())
    }
}

/// A p5.js version qualifier: the newest release, or a pinned
/// `major.minor.patch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum P5Version {
    #[default]
    Latest,
    Pinned(String),
}

impl P5Version {
    /// `true` for the literal `latest`.
    pub const fn is_latest(&self) -> bool {
        matches!(self, Self::Latest)
    }
}

impl FromStr for P5Version {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "latest" {
            return Ok(Self::Latest);
        }

        // Exactly three dot-separated numeric components. No ranges, no
        // pre-release tags.
        let parts: Vec<&str> = value.split('.').collect();
        let well_formed = parts.len() == 3
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));

        if well_formed {
            Ok(Self::Pinned(value.to_owned()))
        } else {
            Err(DomainError::InvalidVersion {
                value: value.to_owned(),
            })
        }
    }
}

impl fmt::Display for P5Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Pinned(v) => write!(f, "{v}"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_parses() {
        assert_eq!("latest".parse::<P5Version>().unwrap(), P5Version::Latest);
    }

    #[test]
    fn pinned_versions_parse() {
        assert_eq!(
            "1.11.1".parse::<P5Version>().unwrap(),
            P5Version::Pinned("1.11.1".into())
        );
        assert_eq!(
            "2.0.0".parse::<P5Version>().unwrap(),
            P5Version::Pinned("2.0.0".into())
        );
    }

    #[test]
    fn malformed_versions_are_rejected() {
        for bad in ["1.11", "v1.11.1", "1.11.1-beta", "", "newest", "1..1"] {
            assert!(
                bad.parse::<P5Version>().is_err(),
                "should have rejected: {bad}"
            );
        }
    }

    #[test]
    fn conflicting_sources_fail_validation() {
        let spec = TemplateSpec {
            source_dir: Some("/path/to/template".into()),
            template_repo: Some("user/repo".into()),
            p5_version: P5Version::Latest,
        };
        assert_eq!(
            spec.validate().unwrap_err(),
            DomainError::ConflictingTemplateSources
        );
    }

    #[test]
    fn single_source_passes_validation() {
        let local = TemplateSpec {
            source_dir: Some("./tpl".into()),
            ..TemplateSpec::default()
        };
        let remote = TemplateSpec {
            template_repo: Some("user/repo".into()),
            ..TemplateSpec::default()
        };
        assert!(local.validate().is_ok());
        assert!(remote.validate().is_ok());
        assert!(TemplateSpec::default().validate().is_ok());
    }
}
