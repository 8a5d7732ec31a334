//! Lease Analyzer API Server
//!
//! A small HTTP service for extracting structured data from PDF lease
//! agreements. Provides REST API endpoints for:
//!
//! - Lease document upload and analysis
//! - Health checking
//!
//! ## Architecture
//!
//! This server is a thin proxy between an HTTP caller and the hosted
//! Gemini model: it reads one uploaded file per request, submits it
//! through the analysis pipeline in `lease-analyzer-core`, and returns
//! the typed report. There is no persistence and no state shared
//! between requests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lease_analyzer_core::{GeminiClient, GeminiConfig, LeaseAnalyzer};

mod api;
mod error;

use api::{handle_health, handle_upload};

/// Command-line arguments for the lease analyzer server
#[derive(Parser, Debug)]
#[command(name = "lease-analyzer-api")]
#[command(about = "HTTP API for analyzing PDF lease documents with Gemini")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Gemini model to use
    #[arg(long, default_value = "gemini-2.0-flash")]
    model: String,

    /// Outbound model call timeout in seconds
    #[arg(long, default_value = "300")]
    timeout_secs: u64,

    /// Gemini API key (usually set via the environment)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<LeaseAnalyzer>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // Upload and analyze
        .route("/analyze-lease/upload", put(handle_upload))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (must happen before clap reads the env)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting lease-analyzer-api on {}:{}",
        args.host, args.port
    );

    // The API key travels in an explicit config object; the core never
    // reads the process environment.
    let config = GeminiConfig::new(args.api_key)
        .with_model(args.model)
        .with_timeout_secs(args.timeout_secs);
    let analyzer = Arc::new(LeaseAnalyzer::new(Arc::new(GeminiClient::new(config))));

    let state = AppState { analyzer };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state).layer(TraceLayer::new_for_http()).layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
