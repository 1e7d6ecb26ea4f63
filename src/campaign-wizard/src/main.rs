//! Campaign Wizard: AI-assisted ad campaign drafting for Google Ads,
//! Instagram, Facebook, LinkedIn and WhatsApp.
//!
//! Main entry point that wires the stores and suggestion generator and
//! starts the server.

mod server;

use campaign_core::config::AppConfig;
use campaign_drafts::{HttpSuggestionGenerator, StaticSuggestionGenerator, SuggestionGenerator};
use campaign_management::ManagementState;
use clap::Parser;
use server::ApiServer;
use std::sync::Arc;
use tracing::{info, warn};

/// Used when `RUST_LOG` is unset; names every workspace crate that logs.
const DEFAULT_LOG_FILTER: &str = "campaign_wizard=info,campaign_management=info,campaign_drafts=info,\
     campaign_suggestions=info,tower_http=info";

#[derive(Parser, Debug)]
#[command(name = "campaign-wizard")]
#[command(about = "AI-assisted ad campaign wizard backend")]
#[command(version)]
struct Cli {
    /// Node identifier (overrides config)
    #[arg(long, env = "CAMPAIGN_WIZARD__NODE_ID")]
    node_id: Option<String>,

    /// Bind address (overrides config)
    #[arg(long, env = "CAMPAIGN_WIZARD__API__HOST")]
    host: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "CAMPAIGN_WIZARD__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Metrics exporter port (overrides config)
    #[arg(long, env = "CAMPAIGN_WIZARD__METRICS__PORT")]
    metrics_port: Option<u16>,

    /// AI suggestion endpoint (overrides config)
    #[arg(long, env = "CAMPAIGN_WIZARD__SUGGESTIONS__ENDPOINT")]
    suggestion_endpoint: Option<String>,

    /// Seed the in-memory draft store with demo drafts
    #[arg(long, default_value_t = false)]
    seed_demo: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("Campaign Wizard starting up");

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(node_id) = cli.node_id {
        config.node_id = node_id;
    }
    if let Some(host) = cli.host {
        config.api.host = host;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(port) = cli.metrics_port {
        config.metrics.port = port;
    }
    if let Some(endpoint) = cli.suggestion_endpoint {
        config.suggestions.endpoint = Some(endpoint);
    }
    if cli.seed_demo {
        config.drafts.seed_demo = true;
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        suggestions = config.suggestions.active_endpoint().is_some(),
        seed_demo = config.drafts.seed_demo,
        "Configuration loaded"
    );

    let generator: Arc<dyn SuggestionGenerator> =
        match HttpSuggestionGenerator::from_config(&config.suggestions)? {
            Some(generator) => Arc::new(generator),
            None => {
                warn!("No AI suggestion endpoint configured; suggestion requests will fail");
                Arc::new(StaticSuggestionGenerator::unavailable())
            }
        };

    let state = ManagementState::in_memory(generator, config.drafts.seed_demo);
    let server = ApiServer::new(config.clone(), state);

    if config.metrics.enabled {
        if let Err(e) = server.start_metrics() {
            warn!(error = %e, "Failed to start metrics exporter");
        }
    }

    info!("Campaign Wizard is ready to serve traffic");

    server.start_http().await
}
