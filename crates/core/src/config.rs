use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `CAMPAIGN_WIZARD__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub drafts: DraftsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

/// AI suggestion generator endpoint. When disabled or without an endpoint,
/// every suggestion request fails with the generic retry message.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_suggestions_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_suggestion_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DraftsConfig {
    /// Seed the in-memory stores with demo drafts and contexts.
    #[serde(default)]
    pub seed_demo: bool,
}

// Default functions
fn default_node_id() -> String {
    "wizard-01".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_metrics_enabled() -> bool {
    true
}
fn default_metrics_port() -> u16 {
    9091
}
fn default_suggestions_enabled() -> bool {
    true
}
fn default_suggestion_timeout_secs() -> u64 {
    60
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            port: default_metrics_port(),
        }
    }
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            enabled: default_suggestions_enabled(),
            endpoint: None,
            api_key: None,
            timeout_secs: default_suggestion_timeout_secs(),
        }
    }
}

impl Default for DraftsConfig {
    fn default() -> Self {
        Self { seed_demo: false }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            api: ApiConfig::default(),
            metrics: MetricsConfig::default(),
            suggestions: SuggestionsConfig::default(),
            drafts: DraftsConfig::default(),
        }
    }
}

impl SuggestionsConfig {
    /// The endpoint to call, if AI suggestions are switched on and configured.
    pub fn active_endpoint(&self) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        self.endpoint.as_deref().filter(|e| !e.trim().is_empty())
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("CAMPAIGN_WIZARD")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
