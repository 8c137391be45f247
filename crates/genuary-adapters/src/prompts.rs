//! The genuary.art prompt feed over HTTP.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info};

use genuary_core::application::ApplicationError;
use genuary_core::application::ports::PromptSource;
use genuary_core::domain::{DomainError, PromptRecord, PromptSet};
use genuary_core::error::GenuaryResult;

const DEFAULT_BASE_URL: &str = "https://genuary.art";

/// Wire shape of `prompts.json` as genuary.art publishes it.
#[derive(Debug, Deserialize)]
struct PromptsPayload {
    year: u16,
    #[serde(rename = "genuaryPrompts")]
    prompts: Vec<PromptRecord>,
}

/// Fetches and validates the year's prompts from genuary.art.
///
/// The current year lives at `/prompts.json`, archived years at
/// `/<year>/prompts.json`. A 404 means the year has no published prompts.
#[derive(Debug, Clone)]
pub struct HttpPromptSource {
    base_url: String,
    client: Client,
}

impl HttpPromptSource {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point at a different feed root. Used for local mirrors and tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    fn url_for(&self, year: Option<u16>) -> String {
        match year {
            Some(year) => format!("{}/{year}/prompts.json", self.base_url),
            None => format!("{}/prompts.json", self.base_url),
        }
    }
}

impl Default for HttpPromptSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptSource for HttpPromptSource {
    fn fetch(&self, year: Option<u16>) -> GenuaryResult<PromptSet> {
        let url = self.url_for(year);
        debug!(%url, "Fetching prompts");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ApplicationError::PromptFetch {
                reason: e.to_string(),
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApplicationError::PromptsUnavailable { year }.into());
        }
        if !response.status().is_success() {
            return Err(ApplicationError::PromptFetch {
                reason: format!("{url} returned {}", response.status()),
            }
            .into());
        }

        let raw: serde_json::Value =
            response.json().map_err(|e| ApplicationError::PromptFetch {
                reason: format!("could not decode {url}: {e}"),
            })?;
        if raw.get("genuaryPrompts").is_none() {
            return Err(DomainError::MissingKey {
                key: "genuaryPrompts",
            }
            .into());
        }
        let payload: PromptsPayload =
            serde_json::from_value(raw).map_err(|e| ApplicationError::PromptFetch {
                reason: format!("could not decode {url}: {e}"),
            })?;

        info!(year = payload.year, count = payload.prompts.len(), "Prompts fetched");
        Ok(PromptSet::new(payload.year, payload.prompts)?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
