//! Suggestion generator adapters.

use std::time::Duration;

use async_trait::async_trait;
use campaign_core::config::SuggestionsConfig;
use campaign_core::{BusinessContext, SuggestionSet, WizardError, WizardResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::ports::SuggestionGenerator;

/// POSTs the business context as JSON and reads back a `SuggestionSet`,
/// either bare or wrapped as `{ "suggestions": ... }`.
pub struct HttpSuggestionGenerator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GeneratorResponse {
    Wrapped { suggestions: SuggestionSet },
    Bare(SuggestionSet),
}

impl HttpSuggestionGenerator {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, timeout: Duration) -> WizardResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WizardError::Config(format!("suggestion client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    /// `None` when the config doesn't enable an endpoint.
    pub fn from_config(config: &SuggestionsConfig) -> WizardResult<Option<Self>> {
        let Some(endpoint) = config.active_endpoint() else {
            return Ok(None);
        };
        info!(endpoint = %endpoint, "AI suggestion endpoint configured");
        Self::new(
            endpoint,
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
        .map(Some)
    }
}

#[async_trait]
impl SuggestionGenerator for HttpSuggestionGenerator {
    async fn generate(&self, context: &BusinessContext) -> Option<SuggestionSet> {
        let mut request = self.client.post(&self.endpoint).json(context);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Suggestion request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Suggestion endpoint returned an error");
            return None;
        }

        let set = match response.json::<GeneratorResponse>().await {
            Ok(GeneratorResponse::Wrapped { suggestions }) => Some(suggestions),
            Ok(GeneratorResponse::Bare(set)) => Some(set),
            Err(e) => {
                warn!(error = %e, "Suggestion response could not be decoded");
                None
            }
        };
        set.filter(|s| !s.is_empty())
    }
}

/// Returns the same payload every time; `None` simulates a backend that
/// never produces anything usable.
pub struct StaticSuggestionGenerator {
    suggestions: Option<SuggestionSet>,
}

impl StaticSuggestionGenerator {
    pub fn new(suggestions: Option<SuggestionSet>) -> Self {
        Self { suggestions }
    }

    pub fn unavailable() -> Self {
        Self { suggestions: None }
    }
}

#[async_trait]
impl SuggestionGenerator for StaticSuggestionGenerator {
    async fn generate(&self, _context: &BusinessContext) -> Option<SuggestionSet> {
        self.suggestions.clone()
    }
}
