//! The genuary.art prompt wire model and its validated aggregate.
//!
//! A [`PromptSet`] is validated on construction: once one exists it is
//! guaranteed to hold exactly 31 records, each carrying at least one identity
//! field, with no duplicate shorthands. Downstream code never re-checks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::PROMPT_COUNT;
use crate::domain::error::DomainError;

/// One daily creative-coding brief.
///
/// All fields are optional in the wire format, but a valid record carries at
/// least one of `name` / `date` / `shorthand`. Unknown fields are preserved
/// in `extra` so the generated manifest round-trips whatever genuary.art
/// publishes alongside the known keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shorthand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<OneOrMany>,

    #[serde(
        default,
        rename = "creditUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub credit_url: Option<OneOrMany>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl PromptRecord {
    /// The identity string used for uniqueness checks and folder naming:
    /// first of shorthand, name, date.
    pub fn identity(&self) -> Option<&str> {
        self.shorthand
            .as_deref()
            .or(self.name.as_deref())
            .or(self.date.as_deref())
    }
}

/// `credit` / `creditUrl` appear as either a single string or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// The validated, ordered set of prompts for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSet {
    year: u16,
    prompts: Vec<PromptRecord>,
}

impl PromptSet {
    /// Validate and take ownership of a fetched prompt list.
    ///
    /// Enforced invariants:
    /// - exactly [`PROMPT_COUNT`] records;
    /// - every record has an identity field;
    /// - identities are unique across the set (folder names derive from
    ///   them, and folder names must be unique per run).
    pub fn new(year: u16, prompts: Vec<PromptRecord>) -> Result<Self, DomainError> {
        if prompts.len() != PROMPT_COUNT {
            return Err(DomainError::WrongPromptCount {
                expected: PROMPT_COUNT,
                actual: prompts.len(),
            });
        }

        let mut seen: Vec<&str> = Vec::with_capacity(prompts.len());
        for (index, prompt) in prompts.iter().enumerate() {
            let Some(identity) = prompt.identity() else {
                return Err(DomainError::PromptMissingIdentity { index });
            };
            if seen.contains(&identity) {
                return Err(DomainError::DuplicateShorthand {
                    shorthand: identity.to_owned(),
                });
            }
            seen.push(identity);
        }

        Ok(Self { year, prompts })
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub fn prompts(&self) -> &[PromptRecord] {
        &self.prompts
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn record(shorthand: &str) -> PromptRecord {
        PromptRecord {
            shorthand: Some(shorthand.into()),
            ..PromptRecord::default()
        }
    }

    fn thirty_one() -> Vec<PromptRecord> {
        (1..=31).map(|d| record(&format!("day {d}"))).collect()
    }

    #[test]
    fn valid_set_is_accepted() {
        let set = PromptSet::new(2026, thirty_one()).unwrap();
        assert_eq!(set.year(), 2026);
        assert_eq!(set.prompts().len(), 31);
    }

    #[test]
    fn wrong_count_is_rejected() {
        let err = PromptSet::new(2026, thirty_one()[..30].to_vec()).unwrap_err();
        assert_eq!(
            err,
            DomainError::WrongPromptCount {
                expected: 31,
                actual: 30
            }
        );
    }

    #[test]
    fn missing_identity_is_rejected() {
        let mut prompts = thirty_one();
        prompts[4] = PromptRecord::default();
        assert_eq!(
            PromptSet::new(2026, prompts).unwrap_err(),
            DomainError::PromptMissingIdentity { index: 4 }
        );
    }

    #[test]
    fn duplicate_shorthand_is_rejected() {
        let mut prompts = thirty_one();
        prompts[7] = record("day 3");
        assert!(matches!(
            PromptSet::new(2026, prompts).unwrap_err(),
            DomainError::DuplicateShorthand { shorthand } if shorthand == "day 3"
        ));
    }

    #[test]
    fn identity_falls_back_name_then_date() {
        let p = PromptRecord {
            name: Some("No palettes.".into()),
            ..PromptRecord::default()
        };
        assert_eq!(p.identity(), Some("No palettes."));

        let p = PromptRecord {
            date: Some("2026-01-02".into()),
            ..PromptRecord::default()
        };
        assert_eq!(p.identity(), Some("2026-01-02"));
    }

    #[test]
    fn credit_accepts_string_or_list() {
        let single: PromptRecord =
            serde_json::from_str(r#"{"shorthand":"x","credit":"Someone"}"#).unwrap();
        assert_eq!(single.credit, Some(OneOrMany::One("Someone".into())));

        let many: PromptRecord =
            serde_json::from_str(r#"{"shorthand":"x","credit":["A","B"]}"#).unwrap();
        assert_eq!(
            many.credit,
            Some(OneOrMany::Many(vec!["A".into(), "B".into()]))
        );
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let p: PromptRecord =
            serde_json::from_str(r#"{"shorthand":"x","difficulty":"hard"}"#).unwrap();
        assert_eq!(p.extra.get("difficulty"), Some(&Value::from("hard")));

        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back.get("difficulty"), Some(&Value::from("hard")));
    }
}
